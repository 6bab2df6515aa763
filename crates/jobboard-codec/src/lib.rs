//! Text codec for the structured values the backend keeps in text columns.
//!
//! Work history, interview rounds and salary bands are stored as JSON when
//! the application wrote them, and as hand-typed text when someone edited
//! the row directly. Any text that parses as JSON is read leniently into the
//! typed shape: null, missing or mistyped members take their defaults and
//! numbers may arrive as strings. Only text that is not JSON at all goes
//! through the per-type plain-text reading. Decoding never fails: the worst
//! case is the type's empty value. Pure synchronous; no HTTP dependencies.
//!
//! # Quick start
//!
//! ```
//! use jobboard_codec::TextCodec;
//! use jobboard_core::job::SalaryRange;
//!
//! let range = SalaryRange::decode(Some("$50,000 - $80,000"));
//! assert_eq!(range, SalaryRange::new(50_000, 80_000));
//! assert_eq!(range.encode(), r#"{"min":50000,"max":80000}"#);
//! ```

mod list;
mod salary;
mod structured;
mod time;

use jobboard_core::Structured;
use serde::Serialize;
use serde_json::Value;

pub use list::{decode_list, encode_list};
pub use time::{decode_date, decode_timestamp, encode_date, encode_timestamp};

// ─── Public API ──────────────────────────────────────────────────────────────

/// A value stored in a single text column.
pub trait TextCodec: Sized {
  /// Decode a column value. Missing or blank input yields the empty value;
  /// malformed input degrades through the plain-text fallback.
  fn decode(raw: Option<&str>) -> Self;

  /// Serialise for the column.
  fn encode(&self) -> String;
}

/// Encode a caller-supplied sub-field: text passes through unchanged, typed
/// values go through [`TextCodec::encode`].
pub fn encode_structured<T: TextCodec>(value: &Structured<T>) -> String {
  match value {
    Structured::Text(text) => text.clone(),
    Structured::Value(value) => value.encode(),
  }
}

// ─── Shared strategy ─────────────────────────────────────────────────────────

/// JSON first, then `fallback` over the raw text. `from_json` receives any
/// syntactically valid document; the fallback only sees text that is not
/// JSON.
pub(crate) fn json_or_else<T, J, F>(
  raw: Option<&str>,
  from_json: J,
  fallback: F,
) -> T
where
  T: Default,
  J: FnOnce(Value) -> T,
  F: FnOnce(&str) -> T,
{
  let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
    return T::default();
  };
  match serde_json::from_str(text) {
    Ok(value) => from_json(value),
    Err(_) => fallback(text),
  }
}

/// Text of a JSON scalar. Null, absent and container values read as `None`.
pub(crate) fn scalar_text(value: Option<&Value>) -> Option<String> {
  match value? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

/// Non-negative integer of a JSON scalar. Floats truncate; strings yield
/// their leading digits, so `"2 years"` reads as `2`.
pub(crate) fn scalar_int(value: Option<&Value>) -> Option<u64> {
  match value? {
    Value::Number(n) => n.as_u64().or_else(|| {
      n.as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.trunc() as u64)
    }),
    Value::String(s) => leading_int(s),
    _ => None,
  }
}

fn leading_int(text: &str) -> Option<u64> {
  let text = text.trim_start();
  let end = text
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(text.len());
  text[..end].parse().ok()
}

/// Compact JSON. The codec's value types contain only strings and integers,
/// so serialisation cannot fail in practice; an empty string stands in if it
/// ever did.
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
  serde_json::to_string(value).unwrap_or_default()
}
