//! An in-memory [`RecordClient`] for repository tests.
//!
//! Rows live in per-table vectors behind a mutex. Ids are assigned from one
//! counter. Predicates compare loosely, the way the backend does: `7`, `"7"`
//! and `{"Id": 7}` are all equal. Faults can be injected per table.

use std::{
  cmp::Ordering,
  collections::{HashMap, HashSet},
  sync::Mutex,
};

use jobboard_core::{
  Record, RecordId,
  client::RecordClient,
  record::{
    BatchResponse, CreateParams, DeleteParams, FetchParams, FetchResponse,
    FieldError, GetResponse, Predicate, RecordParams, RecordResult, SortType,
    UpdateParams, ID_FIELD,
  },
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
#[error("memory client: {0}")]
pub struct MemoryError(String);

/// A failure injected for every call against one table.
#[derive(Debug, Clone)]
pub enum Fault {
  /// Answer with `success: false` and this message.
  Reject(String),
  /// Fail the call itself.
  Transport,
}

#[derive(Default)]
struct State {
  tables:   HashMap<String, Vec<Record>>,
  next_id:  u64,
  faults:   HashMap<String, Fault>,
  required: HashMap<String, HashSet<String>>,
  fetches:  Vec<(String, FetchParams)>,
  writes:   usize,
}

#[derive(Default)]
pub struct MemoryClient {
  state: Mutex<State>,
}

impl MemoryClient {
  pub fn new() -> Self { Self::default() }

  /// Insert a row directly, assigning an id. Returns the id.
  pub fn seed(&self, table: &str, row: Value) -> RecordId {
    let Value::Object(mut row) = row else {
      panic!("seed rows must be objects");
    };
    let mut state = self.state.lock().unwrap();
    state.next_id += 1;
    let id = RecordId::new(state.next_id).unwrap();
    row.insert(ID_FIELD.to_owned(), id.into());
    state.tables.entry(table.to_owned()).or_default().push(row);
    id
  }

  pub fn rows(&self, table: &str) -> Vec<Record> {
    let state = self.state.lock().unwrap();
    state.tables.get(table).cloned().unwrap_or_default()
  }

  pub fn fault(&self, table: &str, fault: Fault) {
    let mut state = self.state.lock().unwrap();
    state.faults.insert(table.to_owned(), fault);
  }

  /// Records written to `table` without a non-blank `field` fail.
  pub fn require(&self, table: &str, field: &str) {
    let mut state = self.state.lock().unwrap();
    state
      .required
      .entry(table.to_owned())
      .or_default()
      .insert(field.to_owned());
  }

  /// Every fetch issued so far, in order.
  pub fn fetches(&self) -> Vec<(String, FetchParams)> {
    self.state.lock().unwrap().fetches.clone()
  }

  /// Number of create/update/delete calls that reached the client.
  pub fn writes(&self) -> usize { self.state.lock().unwrap().writes }
}

// ─── Matching and ordering ───────────────────────────────────────────────────

fn loose_key(value: &Value) -> Option<String> {
  match value {
    Value::Number(n) => n.as_u64().map(|u| u.to_string()).or_else(|| {
      n.as_f64().map(|f| {
        if f.fract() == 0.0 {
          (f as i64).to_string()
        } else {
          f.to_string()
        }
      })
    }),
    Value::String(s) => Some(s.clone()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Object(map) => map.get(ID_FIELD).and_then(loose_key),
    _ => None,
  }
}

fn matches(row: &Record, predicate: &Predicate) -> bool {
  let Some(actual) = row.get(&predicate.field_name).and_then(loose_key) else {
    return false;
  };
  predicate
    .values
    .iter()
    .filter_map(loose_key)
    .any(|expected| expected == actual)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
  match (a, b) {
    (Some(Value::Number(x)), Some(Value::Number(y))) => x
      .as_f64()
      .partial_cmp(&y.as_f64())
      .unwrap_or(Ordering::Equal),
    (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
    (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
    (None | Some(Value::Null), _) => Ordering::Less,
    (_, None | Some(Value::Null)) => Ordering::Greater,
    _ => Ordering::Equal,
  }
}

fn project(row: &Record, fields: impl Iterator<Item = String>) -> Record {
  let mut out = Record::new();
  if let Some(id) = row.get(ID_FIELD) {
    out.insert(ID_FIELD.to_owned(), id.clone());
  }
  for name in fields {
    if let Some(value) = row.get(&name) {
      out.insert(name, value.clone());
    }
  }
  out
}

fn row_id(row: &Record) -> Option<RecordId> {
  row.get(ID_FIELD).and_then(RecordId::from_value)
}

impl State {
  fn check(&self, table: &str) -> Result<Option<String>, MemoryError> {
    match self.faults.get(table) {
      Some(Fault::Transport) => Err(MemoryError(format!("{table} unreachable"))),
      Some(Fault::Reject(message)) => Ok(Some(message.clone())),
      None => Ok(None),
    }
  }

  fn missing(&self, table: &str, record: &Record) -> Vec<FieldError> {
    let Some(required) = self.required.get(table) else {
      return Vec::new();
    };
    let mut missing: Vec<_> = required
      .iter()
      .filter(|field| {
        record
          .get(field.as_str())
          .and_then(Value::as_str)
          .is_none_or(|s| s.trim().is_empty())
      })
      .map(|field| FieldError {
        field_label: field.clone(),
        message:     "is required".to_owned(),
      })
      .collect();
    missing.sort_by(|a, b| a.field_label.cmp(&b.field_label));
    missing
  }
}

// ─── RecordClient ────────────────────────────────────────────────────────────

impl RecordClient for MemoryClient {
  type Error = MemoryError;

  async fn fetch_records<'a>(
    &'a self,
    table: &'a str,
    params: &'a FetchParams,
  ) -> Result<FetchResponse, MemoryError> {
    let mut state = self.state.lock().unwrap();
    state.fetches.push((table.to_owned(), params.clone()));
    if let Some(message) = state.check(table)? {
      return Ok(FetchResponse {
        success: false,
        message: Some(message),
        data:    None,
      });
    }

    let mut rows: Vec<&Record> = state
      .tables
      .get(table)
      .map(|rows| {
        rows
          .iter()
          .filter(|row| params.predicates.iter().all(|p| matches(row, p)))
          .collect()
      })
      .unwrap_or_default();

    rows.sort_by(|a, b| {
      params.order_by.iter().fold(Ordering::Equal, |acc, order| {
        acc.then_with(|| {
          let ord = compare(a.get(&order.field_name), b.get(&order.field_name));
          match order.sort_type {
            SortType::Asc => ord,
            SortType::Desc => ord.reverse(),
          }
        })
      })
    });

    let data = rows
      .into_iter()
      .map(|row| project(row, params.fields.iter().map(|f| f.name().to_owned())))
      .collect();

    Ok(FetchResponse {
      success: true,
      message: None,
      data:    Some(data),
    })
  }

  async fn get_record_by_id<'a>(
    &'a self,
    table: &'a str,
    id: RecordId,
    params: &'a RecordParams,
  ) -> Result<GetResponse, MemoryError> {
    let state = self.state.lock().unwrap();
    if let Some(message) = state.check(table)? {
      return Ok(GetResponse {
        success: false,
        message: Some(message),
        data:    None,
      });
    }

    let data = state
      .tables
      .get(table)
      .and_then(|rows| rows.iter().find(|row| row_id(row) == Some(id)))
      .map(|row| project(row, params.fields.iter().map(|f| f.name().to_owned())));

    Ok(GetResponse {
      success: true,
      message: None,
      data,
    })
  }

  async fn create_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a CreateParams,
  ) -> Result<BatchResponse, MemoryError> {
    let mut state = self.state.lock().unwrap();
    state.writes += 1;
    if let Some(message) = state.check(table)? {
      return Ok(BatchResponse::rejected(message));
    }

    let mut results = Vec::new();
    for record in &params.records {
      let missing = state.missing(table, record);
      if !missing.is_empty() {
        results.push(RecordResult::failed(missing, None));
        continue;
      }
      state.next_id += 1;
      let mut row = record.clone();
      row.insert(ID_FIELD.to_owned(), Value::from(state.next_id));
      state
        .tables
        .entry(table.to_owned())
        .or_default()
        .push(row.clone());
      results.push(RecordResult::succeeded(row));
    }
    Ok(BatchResponse::accepted(results))
  }

  async fn update_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a UpdateParams,
  ) -> Result<BatchResponse, MemoryError> {
    let mut state = self.state.lock().unwrap();
    state.writes += 1;
    if let Some(message) = state.check(table)? {
      return Ok(BatchResponse::rejected(message));
    }

    let mut results = Vec::new();
    for record in &params.records {
      let existing = row_id(record).and_then(|id| {
        state
          .tables
          .get_mut(table)
          .and_then(|rows| rows.iter_mut().find(|row| row_id(row) == Some(id)))
      });
      match existing {
        Some(row) => {
          for (key, value) in record {
            row.insert(key.clone(), value.clone());
          }
          results.push(RecordResult::succeeded(row.clone()));
        }
        None => results.push(RecordResult::failed(
          Vec::new(),
          Some("Record does not exist".to_owned()),
        )),
      }
    }
    Ok(BatchResponse::accepted(results))
  }

  async fn delete_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a DeleteParams,
  ) -> Result<BatchResponse, MemoryError> {
    let mut state = self.state.lock().unwrap();
    state.writes += 1;
    if let Some(message) = state.check(table)? {
      return Ok(BatchResponse::rejected(message));
    }

    let rows = state.tables.entry(table.to_owned()).or_default();
    let results = params
      .record_ids
      .iter()
      .map(|id| match rows.iter().position(|row| row_id(row) == Some(*id)) {
        Some(index) => {
          rows.remove(index);
          RecordResult {
            success: true,
            ..RecordResult::default()
          }
        }
        None => RecordResult::failed(
          Vec::new(),
          Some("Record does not exist".to_owned()),
        ),
      })
      .collect();
    Ok(BatchResponse::accepted(results))
  }
}
