//! Reduction of batch write responses.
//!
//! The backend answers every create/update/delete with an envelope-level
//! `success` plus one result per submitted record. A batch succeeds when at
//! least one record did; the remaining per-record failures ride along so the
//! caller can report them.

use std::fmt;

use jobboard_core::{
  Record,
  record::{BatchResponse, RecordResult},
};

/// One failed record, or one failed field within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
  /// The backend's field label, when the failure is field-specific.
  pub field:   Option<String>,
  pub message: String,
}

impl Failure {
  fn general(message: impl Into<String>) -> Self {
    Self {
      field:   None,
      message: message.into(),
    }
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.field {
      Some(field) => write!(f, "{field}: {}", self.message),
      None => f.write_str(&self.message),
    }
  }
}

/// The normalised result of a batch write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
  /// At least one record succeeded.
  pub ok:        bool,
  /// Whether the backend accepted the request envelope at all. A rejected
  /// request carries its message as the single failure.
  pub accepted:  bool,
  /// Data of the first successful record.
  pub data:      Option<Record>,
  pub failures:  Vec<Failure>,
  pub succeeded: usize,
}

impl BatchOutcome {
  /// All failure messages joined for display.
  pub fn summary(&self) -> String {
    self
      .failures
      .iter()
      .map(Failure::to_string)
      .collect::<Vec<_>>()
      .join("; ")
  }
}

const UNKNOWN_ERROR: &str = "Unknown error";

/// Reduce a batch response; `None` stands for an absent response.
///
/// Deletes use the same reduction and read only [`BatchOutcome::ok`].
pub fn reduce(response: Option<BatchResponse>) -> BatchOutcome {
  let response = match response {
    Some(r) if r.success => r,
    other => {
      let message = other
        .and_then(|r| r.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
      return BatchOutcome {
        failures: vec![Failure::general(message)],
        ..BatchOutcome::default()
      };
    }
  };

  let mut outcome = BatchOutcome {
    accepted: true,
    ..BatchOutcome::default()
  };

  for result in response.results.unwrap_or_default() {
    if result.success {
      outcome.succeeded += 1;
      if outcome.succeeded == 1 {
        outcome.data = result.data;
      }
    } else {
      outcome.failures.extend(record_failures(result));
    }
  }

  outcome.ok = outcome.succeeded > 0;
  outcome
}

fn record_failures(result: RecordResult) -> Vec<Failure> {
  let record_message = result
    .message
    .filter(|m| !m.trim().is_empty());
  let errors = result.errors.unwrap_or_default();

  if errors.is_empty() {
    return vec![Failure::general(
      record_message.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
    )];
  }

  errors
    .into_iter()
    .map(|error| Failure {
      field:   Some(error.field_label).filter(|l| !l.is_empty()),
      message: Some(error.message)
        .filter(|m| !m.is_empty())
        .or_else(|| record_message.clone())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use jobboard_core::record::FieldError;
  use serde_json::json;

  use super::*;

  fn parse(value: serde_json::Value) -> BatchResponse {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn partial_success_keeps_first_data_and_failures() {
    let outcome = reduce(Some(parse(json!({
      "success": true,
      "results": [
        { "success": true, "data": { "Id": 5 } },
        { "success": false, "errors": [{ "fieldLabel": "title_c", "message": "required" }] }
      ]
    }))));

    assert!(outcome.ok);
    assert!(outcome.accepted);
    assert_eq!(outcome.data.unwrap().get("Id"), Some(&json!(5)));
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].field.as_deref(), Some("title_c"));
    assert_eq!(outcome.failures[0].message, "required");
  }

  #[test]
  fn envelope_failure_surfaces_message() {
    let outcome = reduce(Some(parse(json!({ "success": false, "message": "boom" }))));
    assert!(!outcome.ok);
    assert!(!outcome.accepted);
    assert!(outcome.data.is_none());
    assert_eq!(outcome.failures, vec![Failure::general("boom")]);
  }

  #[test]
  fn absent_response_is_failure() {
    let outcome = reduce(None);
    assert!(!outcome.ok);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].message, UNKNOWN_ERROR);
  }

  #[test]
  fn all_failed_is_not_ok() {
    let outcome = reduce(Some(BatchResponse::accepted(vec![
      RecordResult::failed(vec![], Some("duplicate".into())),
      RecordResult::failed(
        vec![FieldError {
          field_label: "email_c".into(),
          message:     String::new(),
        }],
        Some("invalid row".into()),
      ),
    ])));

    assert!(!outcome.ok);
    assert!(outcome.accepted);
    assert!(outcome.data.is_none());
    assert_eq!(
      outcome.failures,
      vec![
        Failure::general("duplicate"),
        Failure {
          field:   Some("email_c".into()),
          message: "invalid row".into(),
        },
      ]
    );
    assert_eq!(outcome.summary(), "duplicate; email_c: invalid row");
  }

  #[test]
  fn first_success_wins_among_many() {
    let mut first = Record::new();
    first.insert("Id".into(), json!(1));
    let mut second = Record::new();
    second.insert("Id".into(), json!(2));

    let outcome = reduce(Some(BatchResponse::accepted(vec![
      RecordResult::failed(vec![], None),
      RecordResult::succeeded(first.clone()),
      RecordResult::succeeded(second),
    ])));

    assert!(outcome.ok);
    assert_eq!(outcome.succeeded, 2);
    assert_eq!(outcome.data, Some(first));
    assert_eq!(outcome.failures.len(), 1);
  }

  #[test]
  fn success_without_data_is_still_ok() {
    // Deletes answer with bare `{success: true}` per record.
    let outcome = reduce(Some(BatchResponse::accepted(vec![RecordResult {
      success: true,
      ..RecordResult::default()
    }])));
    assert!(outcome.ok);
    assert!(outcome.data.is_none());

    assert!(!reduce(Some(BatchResponse::accepted(vec![]))).ok);
    assert!(!reduce(Some(BatchResponse::rejected("nope"))).ok);
  }
}
