//! Primitives shared by the per-entity field mappers.
//!
//! Inbound, every canonical field resolves from an ordered list of backend
//! column aliases: the first non-blank value wins. Outbound, a [`Payload`]
//! writes only the columns the mapper names, defaulting absent values on
//! create and omitting them on update.

use chrono::{DateTime, NaiveDate, Utc};
use jobboard_codec::{
  TextCodec, decode_date, decode_list, decode_timestamp, encode_timestamp,
};
use jobboard_core::{Record, RecordId, record::ID_FIELD};
use serde_json::Value;

use crate::{Error, Result};

// ─── Alias resolution ────────────────────────────────────────────────────────

fn is_blank(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::String(s) => s.trim().is_empty(),
    _ => false,
  }
}

/// Walk `aliases` in order and return the first non-blank value that `read`
/// accepts.
fn resolve<T>(
  record: &Record,
  aliases: &[&str],
  read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
  aliases
    .iter()
    .filter_map(|alias| record.get(*alias))
    .filter(|value| !is_blank(value))
    .find_map(read)
}

/// Display text of a scalar; lookup columns (`{"Id": .., "Name": ..}`) read
/// as their `Name`.
fn scalar_text(value: &Value) -> Option<String> {
  let text = match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Object(map) => map.get("Name").and_then(scalar_text),
    _ => None,
  };
  text.filter(|s| !s.is_empty())
}

/// Column contents as the codec expects them. Some backends hand structured
/// columns back already parsed; those are re-serialised.
fn column_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

fn as_bool(value: &Value) -> Option<bool> {
  match value {
    Value::Bool(b) => Some(*b),
    Value::Number(n) => n.as_f64().map(|f| f != 0.0),
    Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
      "true" | "1" | "yes" => Some(true),
      "false" | "0" | "no" => Some(false),
      _ => None,
    },
    _ => None,
  }
}

fn as_count(value: &Value) -> Option<u32> {
  match value {
    Value::Number(n) => n
      .as_u64()
      .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
      .map(|n| u32::try_from(n).unwrap_or(u32::MAX)),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

pub fn text(record: &Record, aliases: &[&str]) -> String {
  resolve(record, aliases, scalar_text).unwrap_or_default()
}

pub fn reference(record: &Record, aliases: &[&str]) -> Option<RecordId> {
  resolve(record, aliases, RecordId::from_value)
}

pub fn flag(record: &Record, aliases: &[&str]) -> bool {
  resolve(record, aliases, as_bool).unwrap_or(false)
}

pub fn count(record: &Record, aliases: &[&str]) -> u32 {
  resolve(record, aliases, as_count).unwrap_or(0)
}

pub fn timestamp(record: &Record, aliases: &[&str]) -> Option<DateTime<Utc>> {
  resolve(record, aliases, |v| v.as_str().and_then(decode_timestamp))
}

pub fn date(record: &Record, aliases: &[&str]) -> Option<NaiveDate> {
  resolve(record, aliases, |v| v.as_str().and_then(decode_date))
}

pub fn list(record: &Record, aliases: &[&str]) -> Vec<String> {
  decode_list(resolve(record, aliases, scalar_text).as_deref())
}

/// A picklist column; absent values take the enum's default.
pub fn label<T>(record: &Record, aliases: &[&str]) -> T
where
  T: for<'a> From<&'a str> + Default,
{
  resolve(record, aliases, scalar_text)
    .map(|s| T::from(s.trim()))
    .unwrap_or_default()
}

/// A structured text column, decoded through the codec.
pub fn structured<T: TextCodec>(record: &Record, aliases: &[&str]) -> T {
  T::decode(resolve(record, aliases, column_text).as_deref())
}

pub fn record_id(record: &Record, entity: &'static str) -> Result<RecordId> {
  record
    .get(ID_FIELD)
    .and_then(RecordId::from_value)
    .ok_or(Error::MissingId { entity })
}

// ─── Payloads ────────────────────────────────────────────────────────────────

/// Whether a payload is for an insert or for a patch of an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
  Create,
  Update(RecordId),
}

/// Builder for an outbound record.
///
/// On update the `Id` column is set up front; on create it is never written.
pub struct Payload {
  record:   Record,
  creating: bool,
}

impl Payload {
  pub fn new(mode: WriteMode) -> Self {
    let mut record = Record::new();
    let creating = match mode {
      WriteMode::Create => true,
      WriteMode::Update(id) => {
        record.insert(ID_FIELD.to_owned(), id.into());
        false
      }
    };
    Self { record, creating }
  }

  /// Always written.
  pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
    self.record.insert(column.to_owned(), value.into());
    self
  }

  /// Written when supplied. When absent, `default()` is written on create
  /// and the column is left out on update.
  pub fn field<V: Into<Value>>(
    self,
    column: &str,
    value: Option<V>,
    default: impl FnOnce() -> V,
  ) -> Self {
    match value {
      Some(value) => self.set(column, value),
      None if self.creating => self.set(column, default()),
      None => self,
    }
  }

  /// Written only when supplied, in either mode.
  pub fn optional<V: Into<Value>>(self, column: &str, value: Option<V>) -> Self {
    match value {
      Some(value) => self.set(column, value),
      None => self,
    }
  }

  pub fn finish(self) -> Record { self.record }
}

/// The current instant in the backend's timestamp format.
pub fn now() -> String { encode_timestamp(Utc::now()) }

// ─── Validation ──────────────────────────────────────────────────────────────

/// A text field that must be present and non-blank.
pub fn require_text<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
  value
    .filter(|v| !v.trim().is_empty())
    .ok_or_else(|| Error::Validation(format!("{what} is required")))
}

/// A text field that may be absent but must not be blank when given.
pub fn reject_blank(value: Option<&str>, what: &str) -> Result<()> {
  match value {
    Some(v) if v.trim().is_empty() => {
      Err(Error::Validation(format!("{what} must not be empty")))
    }
    _ => Ok(()),
  }
}

/// A foreign key that must be present.
pub fn require_ref(value: Option<RecordId>, what: &str) -> Result<RecordId> {
  value.ok_or_else(|| Error::Validation(format!("{what} is required")))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn record(value: Value) -> Record {
    match value {
      Value::Object(map) => map,
      _ => panic!("not an object"),
    }
  }

  const NAME: &[&str] = &["name_c", "Name"];

  #[test]
  fn first_non_blank_alias_wins() {
    assert_eq!(text(&record(json!({ "name_c": "Ada", "Name": "X" })), NAME), "Ada");
    assert_eq!(text(&record(json!({ "Name": "X" })), NAME), "X");
    assert_eq!(text(&record(json!({ "name_c": "", "Name": "X" })), NAME), "X");
    assert_eq!(text(&record(json!({ "name_c": null, "Name": "X" })), NAME), "X");
    assert_eq!(text(&record(json!({})), NAME), "");
  }

  #[test]
  fn lookup_columns_resolve_to_id_or_name() {
    let row = record(json!({ "job_id_c": { "Id": 12, "Name": "Engineer" } }));
    assert_eq!(reference(&row, &["job_id_c"]), RecordId::new(12));
    assert_eq!(text(&row, &["job_id_c"]), "Engineer");
  }

  #[test]
  fn loose_scalars_coerce() {
    let row = record(json!({
      "read_c": "true",
      "unread_count_c": "4",
      "other": 2.0,
    }));
    assert!(flag(&row, &["read_c"]));
    assert!(!flag(&row, &["missing"]));
    assert_eq!(count(&row, &["unread_count_c"]), 4);
    assert_eq!(count(&row, &["other"]), 2);
    assert_eq!(count(&row, &["missing"]), 0);
  }

  #[test]
  fn record_id_is_required() {
    assert!(record_id(&record(json!({ "Id": 3 })), "job").is_ok());
    assert!(matches!(
      record_id(&record(json!({ "Name": "x" })), "job"),
      Err(Error::MissingId { entity: "job" })
    ));
  }

  #[test]
  fn create_defaults_and_update_omits() {
    let id = RecordId::new(9).unwrap();

    let created = Payload::new(WriteMode::Create)
      .field("title_c", None::<String>, || "untitled".to_owned())
      .optional("due_date_c", None::<String>)
      .finish();
    assert_eq!(created.get("title_c"), Some(&json!("untitled")));
    assert!(!created.contains_key("Id"));
    assert!(!created.contains_key("due_date_c"));

    let updated = Payload::new(WriteMode::Update(id))
      .field("title_c", None::<String>, || "untitled".to_owned())
      .field("status_c", Some("Done".to_owned()), String::new)
      .finish();
    assert_eq!(updated.get("Id"), Some(&json!(9)));
    assert!(!updated.contains_key("title_c"));
    assert_eq!(updated.get("status_c"), Some(&json!("Done")));
  }

  #[test]
  fn validation_helpers() {
    assert!(require_text(Some("  "), "title").is_err());
    assert_eq!(require_text(Some("x"), "title").unwrap(), "x");
    assert!(reject_blank(None, "title").is_ok());
    assert!(reject_blank(Some(""), "title").is_err());
    assert!(require_ref(None, "job").is_err());
  }
}
