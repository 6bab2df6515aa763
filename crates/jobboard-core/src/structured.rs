//! Inputs for structured sub-fields that the backend stores as text.

use serde::{Deserialize, Serialize};

/// A structured sub-field supplied by a caller either as a typed value or as
/// text already in the backend's column format.
///
/// Text is written through untouched; typed values are serialised by the
/// codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Structured<T> {
  Text(String),
  Value(T),
}

impl<T> From<T> for Structured<T> {
  fn from(value: T) -> Self { Self::Value(value) }
}
