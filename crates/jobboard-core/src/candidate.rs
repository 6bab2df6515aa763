//! Candidate profiles.

use serde::{Deserialize, Serialize};

use crate::{Record, RecordId, Structured};

/// One position held by a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
  #[serde(default)]
  pub position: String,
  #[serde(default)]
  pub company:  String,
  /// Length of the engagement in years.
  #[serde(default = "default_duration")]
  pub duration: u32,
}

fn default_duration() -> u32 { 1 }

impl ExperienceEntry {
  /// An entry known only by its free-text description.
  pub fn from_line(line: &str) -> Self {
    Self {
      position: line.to_owned(),
      company:  String::new(),
      duration: default_duration(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
  pub id:          RecordId,
  pub name:        String,
  pub email:       String,
  pub phone:       String,
  pub location:    String,
  pub description: String,
  pub education:   String,
  pub resume:      String,
  pub preferences: String,
  pub skills:      Vec<String>,
  pub experience:  Vec<ExperienceEntry>,
  pub tags:        Vec<String>,
  #[serde(skip)]
  pub record:      Record,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
  pub name:        Option<String>,
  pub email:       Option<String>,
  pub phone:       Option<String>,
  pub location:    Option<String>,
  pub description: Option<String>,
  pub education:   Option<String>,
  pub resume:      Option<String>,
  pub preferences: Option<String>,
  pub skills:      Option<Vec<String>>,
  pub experience:  Option<Structured<Vec<ExperienceEntry>>>,
  pub tags:        Option<Vec<String>>,
}
