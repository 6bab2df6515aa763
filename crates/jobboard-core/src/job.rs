//! Job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, RecordId, Structured};

label_enum! {
  /// Employment type of a posting.
  pub enum JobType {
    #[default]
    FullTime => "Full-time",
    PartTime => "Part-time",
    Contract => "Contract",
    Internship => "Internship",
    Temporary => "Temporary",
  }
}

label_enum! {
  /// Whether a posting accepts applications.
  pub enum JobStatus {
    #[default]
    Active => "Active",
    Closed => "Closed",
    Draft => "Draft",
  }
}

/// Advertised pay band. `{0, 0}` means "not stated".
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct SalaryRange {
  pub min: u64,
  pub max: u64,
}

impl SalaryRange {
  pub fn new(min: u64, max: u64) -> Self { Self { min, max } }

  pub fn is_unstated(&self) -> bool { self.min == 0 && self.max == 0 }
}

/// A job posting as the application sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  pub id:           RecordId,
  pub title:        String,
  pub company:      String,
  pub description:  String,
  pub requirements: String,
  pub location:     String,
  #[serde(rename = "type")]
  pub job_type:     JobType,
  pub status:       JobStatus,
  pub posted_date:  Option<DateTime<Utc>>,
  pub salary_range: SalaryRange,
  pub tags:         Vec<String>,
  /// The backend row this job was decoded from.
  #[serde(skip)]
  pub record:       Record,
}

/// Input to job create/update. `None` fields are defaulted on create and
/// left untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
  pub title:        Option<String>,
  pub company:      Option<String>,
  pub description:  Option<String>,
  pub requirements: Option<String>,
  pub location:     Option<String>,
  pub salary_range: Option<Structured<SalaryRange>>,
  #[serde(rename = "type")]
  pub job_type:     Option<JobType>,
  pub status:       Option<JobStatus>,
  pub posted_date:  Option<DateTime<Utc>>,
  pub tags:         Option<Vec<String>>,
}
