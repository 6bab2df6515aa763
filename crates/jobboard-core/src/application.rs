//! Applications of candidates to jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, RecordId, Structured};

label_enum! {
  /// Pipeline stage of an application.
  pub enum ApplicationStatus {
    #[default]
    Applied => "Applied",
    Screening => "Screening",
    Interviewing => "Interviewing",
    Offered => "Offered",
    Rejected => "Rejected",
    Hired => "Hired",
  }
}

/// One interview round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
  /// Free-form date text as entered; may be empty.
  #[serde(default)]
  pub date:  String,
  #[serde(rename = "type", default = "default_kind")]
  pub kind:  String,
  #[serde(default)]
  pub notes: String,
}

fn default_kind() -> String { "Interview".to_owned() }

impl Interview {
  /// An interview known only by a line of notes.
  pub fn from_line(line: &str) -> Self {
    Self {
      date:  String::new(),
      kind:  default_kind(),
      notes: line.to_owned(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
  pub id:           RecordId,
  /// Display name; synthesised from the job reference when not given.
  pub name:         String,
  pub job_id:       Option<RecordId>,
  pub candidate_id: Option<RecordId>,
  pub status:       ApplicationStatus,
  pub applied_date: Option<DateTime<Utc>>,
  pub cover_letter: String,
  pub notes:        String,
  pub interviews:   Vec<Interview>,
  pub tags:         Vec<String>,
  #[serde(skip)]
  pub record:       Record,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
  pub name:         Option<String>,
  pub job_id:       Option<RecordId>,
  pub candidate_id: Option<RecordId>,
  pub status:       Option<ApplicationStatus>,
  pub applied_date: Option<DateTime<Utc>>,
  pub cover_letter: Option<String>,
  pub notes:        Option<String>,
  pub interviews:   Option<Structured<Vec<Interview>>>,
  pub tags:         Option<Vec<String>>,
}
