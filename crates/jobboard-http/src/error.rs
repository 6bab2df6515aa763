//! Error type for `jobboard-http`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),

  #[error("{method} {url} failed: {source}")]
  Request {
    method: reqwest::Method,
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  /// Non-success status whose body was not a backend envelope.
  #[error("{method} {url} → {status}: {body}")]
  Status {
    method: reqwest::Method,
    url:    String,
    status: reqwest::StatusCode,
    body:   String,
  },

  #[error("deserialising response from {url}: {source}")]
  Decode {
    url:    String,
    #[source]
    source: serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
