//! Recruiter to-do items.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

label_enum! {
  pub enum TaskStatus {
    #[default]
    New => "New",
    InProgress => "In Progress",
    Completed => "Completed",
    Blocked => "Blocked",
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
  pub id:          RecordId,
  pub title:       String,
  pub description: String,
  pub status:      TaskStatus,
  pub due_date:    Option<NaiveDate>,
  pub created_on:  Option<DateTime<Utc>>,
  pub modified_on: Option<DateTime<Utc>>,
  pub tags:        Vec<String>,
  #[serde(skip)]
  pub record:      Record,
}

impl Task {
  /// Past due on `today` and not yet completed.
  pub fn is_overdue(&self, today: NaiveDate) -> bool {
    self.status != TaskStatus::Completed
      && self.due_date.is_some_and(|due| due < today)
  }
}

/// Input to task create/update. `title` is required and must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub status:      Option<TaskStatus>,
  pub due_date:    Option<NaiveDate>,
  pub tags:        Option<Vec<String>>,
}

/// Counts over a task list, computed client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
  pub total:       usize,
  pub new:         usize,
  pub in_progress: usize,
  pub completed:   usize,
  pub blocked:     usize,
  pub overdue:     usize,
}

impl TaskStats {
  pub fn compute<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    today: NaiveDate,
  ) -> Self {
    let mut stats = Self::default();
    for task in tasks {
      stats.total += 1;
      match task.status {
        TaskStatus::New => stats.new += 1,
        TaskStatus::InProgress => stats.in_progress += 1,
        TaskStatus::Completed => stats.completed += 1,
        TaskStatus::Blocked => stats.blocked += 1,
        TaskStatus::Other(_) => {}
      }
      if task.is_overdue(today) {
        stats.overdue += 1;
      }
    }
    stats
  }
}
