//! Backend-assigned record identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// A positive integer assigned by the record backend on insert.
///
/// Never client-generated and never zero. Foreign keys use the same type, so
/// an outbound reference is valid by construction.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
  /// Returns `None` for zero.
  pub fn new(value: u64) -> Option<Self> { (value > 0).then_some(Self(value)) }

  pub fn get(self) -> u64 { self.0 }

  /// Coerce a loosely-typed backend value into an id.
  ///
  /// Lookup columns come back as a number, a numeric string, or an object
  /// of the form `{"Id": 7, "Name": "..."}`. Anything else yields `None`.
  pub fn from_value(value: &Value) -> Option<Self> {
    match value {
      Value::Number(n) => n
        .as_u64()
        .or_else(|| {
          n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
        })
        .and_then(Self::new),
      Value::String(s) => s.parse().ok(),
      Value::Object(map) => map.get("Id").and_then(Self::from_value),
      _ => None,
    }
  }
}

impl TryFrom<u64> for RecordId {
  type Error = Error;

  fn try_from(value: u64) -> Result<Self> {
    Self::new(value).ok_or_else(|| Error::InvalidId(value.to_string()))
  }
}

impl From<RecordId> for u64 {
  fn from(id: RecordId) -> Self { id.0 }
}

impl From<RecordId> for Value {
  fn from(id: RecordId) -> Self { Value::from(id.0) }
}

impl FromStr for RecordId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    s.trim()
      .parse::<u64>()
      .ok()
      .and_then(Self::new)
      .ok_or_else(|| Error::InvalidId(s.to_owned()))
  }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}
