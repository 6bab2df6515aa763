//! Hiring companies.

use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
  pub id:          RecordId,
  pub name:        String,
  pub description: String,
  pub industry:    String,
  pub size:        String,
  pub location:    String,
  pub website:     String,
  /// Opaque job reference list; carried through but never expanded.
  pub jobs:        String,
  pub tags:        Vec<String>,
  #[serde(skip)]
  pub record:      Record,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInput {
  pub name:        Option<String>,
  pub description: Option<String>,
  pub industry:    Option<String>,
  pub size:        Option<String>,
  pub location:    Option<String>,
  pub website:     Option<String>,
  pub jobs:        Option<String>,
  pub tags:        Option<Vec<String>>,
}
