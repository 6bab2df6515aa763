//! Per-entity field mappers.
//!
//! Each entity names its table, the columns it projects, the alias chain for
//! every canonical field, and the columns it may write. Inbound decoding
//! never fails on missing or malformed columns, only on a missing `Id`.
//! Outbound payloads are validated before they are built, so an invalid
//! input never reaches the backend.

mod application;
mod candidate;
mod company;
mod contact;
mod job;
pub(crate) mod message;
pub(crate) mod saved;
pub(crate) mod task;

use jobboard_core::{Record, record::OrderBy};

pub use saved::Bookmark;

use crate::{Result, encode::WriteMode};

/// The system display column present on every table.
pub(crate) const NAME: &str = "Name";
/// The system comma-separated tags column.
pub(crate) const TAGS: &str = "Tags";

/// A domain entity stored as rows of one backend table.
pub trait Entity: Sized + Send {
  /// Backend table name.
  const TABLE: &'static str;
  /// Human-readable noun for logs and errors.
  const NOUN: &'static str;
  /// Columns requested on every read.
  const FIELDS: &'static [&'static str];

  /// Caller-supplied values for create and update.
  type Input: Send + Sync;

  /// Decode a backend row.
  fn to_domain(record: Record) -> Result<Self>;

  /// Validate `input` and build the outbound row for `mode`.
  fn to_payload(input: &Self::Input, mode: WriteMode) -> Result<Record>;

  /// Ordering applied to `list`. Newest first unless overridden.
  fn default_order() -> Vec<OrderBy> { vec![OrderBy::desc("Id")] }
}
