//! Submissions from the public contact form.

use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub id:      RecordId,
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
  #[serde(skip)]
  pub record:  Record,
}

/// A contact form submission. Every field is required and must be
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageInput {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}
