//! Bookmarks: jobs and candidates a user has saved.
//!
//! A (user, target) pair is meant to be saved at most once. The backend has
//! no conditional insert, so uniqueness is checked by the repository before
//! each add and is not guaranteed under concurrent toggles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
  pub id:       RecordId,
  pub user_id:  Option<RecordId>,
  pub job_id:   Option<RecordId>,
  pub saved_at: Option<DateTime<Utc>>,
  #[serde(skip)]
  pub record:   Record,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCandidate {
  pub id:           RecordId,
  pub user_id:      Option<RecordId>,
  pub candidate_id: Option<RecordId>,
  pub saved_at:     Option<DateTime<Utc>>,
  #[serde(skip)]
  pub record:       Record,
}

/// Input for a new bookmark. `saved_at` defaults to now on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveInput {
  pub user_id:   RecordId,
  pub target_id: RecordId,
  pub saved_at:  Option<DateTime<Utc>>,
}
