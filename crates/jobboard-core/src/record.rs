//! Wire shapes exchanged with the remote record backend.
//!
//! A [`Record`] is the backend's flat, field-keyed row. Custom columns carry
//! a `_c` suffix; system columns (`Id`, `Name`, `Tags`, `CreatedOn`, ...) do
//! not. Request and response envelopes mirror the backend's JSON contract
//! exactly, including its mixed casing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::RecordId;

/// A raw backend row before domain normalisation.
pub type Record = serde_json::Map<String, Value>;

/// The backend's primary-key column.
pub const ID_FIELD: &str = "Id";

// ─── Projection ──────────────────────────────────────────────────────────────

/// One projected column: `{"field": {"Name": "title_c"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
  pub field: FieldName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldName {
  #[serde(rename = "Name")]
  pub name: String,
}

impl Field {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      field: FieldName { name: name.into() },
    }
  }

  pub fn name(&self) -> &str { &self.field.name }
}

/// Build a projection list from column names.
pub fn fields(names: &[&str]) -> Vec<Field> {
  names.iter().map(|n| Field::named(*n)).collect()
}

// ─── Predicates ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
  /// Equality on scalar and lookup columns.
  EqualTo,
  /// Case-sensitive whole-value match on text and picklist columns.
  ExactMatch,
}

/// `{"FieldName": "...", "Operator": "EqualTo", "Values": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Predicate {
  pub field_name: String,
  pub operator:   Operator,
  pub values:     Vec<Value>,
}

impl Predicate {
  pub fn equal_to(field: impl Into<String>, value: impl Into<Value>) -> Self {
    Self {
      field_name: field.into(),
      operator:   Operator::EqualTo,
      values:     vec![value.into()],
    }
  }

  pub fn exact_match(field: impl Into<String>, value: impl Into<Value>) -> Self {
    Self {
      field_name: field.into(),
      operator:   Operator::ExactMatch,
      values:     vec![value.into()],
    }
  }
}

// ─── Ordering ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortType {
  Asc,
  Desc,
}

/// `{"fieldName": "Id", "sorttype": "DESC"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
  #[serde(rename = "fieldName")]
  pub field_name: String,
  #[serde(rename = "sorttype")]
  pub sort_type:  SortType,
}

impl OrderBy {
  pub fn asc(field: impl Into<String>) -> Self {
    Self {
      field_name: field.into(),
      sort_type:  SortType::Asc,
    }
  }

  pub fn desc(field: impl Into<String>) -> Self {
    Self {
      field_name: field.into(),
      sort_type:  SortType::Desc,
    }
  }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `fetchRecords(table, params)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchParams {
  pub fields:     Vec<Field>,
  #[serde(rename = "where", default, skip_serializing_if = "Vec::is_empty")]
  pub predicates: Vec<Predicate>,
  #[serde(rename = "orderBy", default, skip_serializing_if = "Vec::is_empty")]
  pub order_by:   Vec<OrderBy>,
}

impl FetchParams {
  pub fn new(columns: &[&str]) -> Self {
    Self {
      fields: fields(columns),
      ..Self::default()
    }
  }

  pub fn filter(mut self, predicate: Predicate) -> Self {
    self.predicates.push(predicate);
    self
  }

  pub fn order(mut self, order: OrderBy) -> Self {
    self.order_by.push(order);
    self
  }
}

/// Body of `getRecordById(table, id, params)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordParams {
  pub fields: Vec<Field>,
}

impl RecordParams {
  pub fn new(columns: &[&str]) -> Self {
    Self {
      fields: fields(columns),
    }
  }
}

/// Body of `createRecord(table, params)`. Records never carry `Id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateParams {
  pub records: Vec<Record>,
}

/// Body of `updateRecord(table, params)`. Every record carries `Id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateParams {
  pub records: Vec<Record>,
}

/// Body of `deleteRecord(table, params)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteParams {
  pub record_ids: Vec<RecordId>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// Response to `fetchRecords`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data:    Option<Vec<Record>>,
}

/// Response to `getRecordById`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data:    Option<Record>,
}

/// Response to the batch writes: create, update, delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub results: Option<Vec<RecordResult>>,
}

impl BatchResponse {
  /// A whole-request rejection with no per-record results.
  pub fn rejected(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: Some(message.into()),
      results: None,
    }
  }

  /// An accepted request carrying per-record results.
  pub fn accepted(results: Vec<RecordResult>) -> Self {
    Self {
      success: true,
      message: None,
      results: Some(results),
    }
  }
}

/// The outcome for one record inside a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data:    Option<Record>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub errors:  Option<Vec<FieldError>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl RecordResult {
  pub fn succeeded(data: Record) -> Self {
    Self {
      success: true,
      data:    Some(data),
      ..Self::default()
    }
  }

  pub fn failed(errors: Vec<FieldError>, message: Option<String>) -> Self {
    Self {
      success: false,
      errors: Some(errors),
      message,
      ..Self::default()
    }
  }
}

/// A field-level validation error reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
  #[serde(default)]
  pub field_label: String,
  #[serde(default)]
  pub message:     String,
}
