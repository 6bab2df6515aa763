//! Error type for `jobboard-records`.

use jobboard_core::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] jobboard_core::Error),

  /// `get_by_id` found no row.
  #[error("{entity} {id} not found")]
  NotFound { entity: &'static str, id: RecordId },

  /// An outbound write was refused before any network I/O.
  #[error("validation failed: {0}")]
  Validation(String),

  /// The (user, target) pair is already bookmarked.
  #[error("{entity} for target {target} is already saved")]
  AlreadySaved {
    entity: &'static str,
    target: RecordId,
  },

  /// The backend answered a write with `success: false`.
  #[error("backend rejected {entity} {op}: {message}")]
  Rejected {
    entity:  &'static str,
    op:      &'static str,
    message: String,
  },

  /// A row came back without a usable `Id`.
  #[error("{entity} record has no usable Id")]
  MissingId { entity: &'static str },

  /// The client call itself failed.
  #[error("transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
