//! Task listing by status and the derived statistics.

use chrono::{NaiveDate, Utc};
use jobboard_core::{
  RecordId,
  client::RecordClient,
  record::Predicate,
  task::{Task, TaskInput, TaskStats, TaskStatus},
};

use super::Repository;
use crate::{Result, mapper::task::STATUS};

pub type Tasks<C> = Repository<C, Task>;

/// Status filter for task lists. `All` issues no predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
  #[default]
  All,
  Is(TaskStatus),
}

impl StatusFilter {
  pub fn predicate(&self) -> Option<Predicate> {
    match self {
      Self::All => None,
      Self::Is(status) => Some(Predicate::exact_match(STATUS, status.as_str())),
    }
  }
}

impl From<&str> for StatusFilter {
  fn from(label: &str) -> Self {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case("all") {
      Self::All
    } else {
      Self::Is(TaskStatus::from(label))
    }
  }
}

impl From<TaskStatus> for StatusFilter {
  fn from(status: TaskStatus) -> Self { Self::Is(status) }
}

impl<C: RecordClient> Repository<C, Task> {
  /// Tasks with the given status, soonest due first.
  pub async fn list_filtered(&self, filter: &StatusFilter) -> Vec<Task> {
    self.list_where(filter.predicate().into_iter().collect()).await
  }

  /// Counts over every task as of today (UTC).
  pub async fn get_stats(&self) -> TaskStats {
    self.stats_as_of(Utc::now().date_naive()).await
  }

  /// Counts over every task, with overdue judged against `today`.
  ///
  /// Computed from a full list on each call. An unavailable backend yields
  /// all zeroes.
  pub async fn stats_as_of(&self, today: NaiveDate) -> TaskStats {
    TaskStats::compute(&self.list().await, today)
  }

  pub async fn set_status(
    &self,
    id: RecordId,
    status: TaskStatus,
  ) -> Result<Option<Task>> {
    let input = TaskInput {
      status: Some(status),
      ..TaskInput::default()
    };
    self.update(id, &input).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_and_blank_mean_no_predicate() {
    assert_eq!(StatusFilter::from("All"), StatusFilter::All);
    assert_eq!(StatusFilter::from("all"), StatusFilter::All);
    assert_eq!(StatusFilter::from(""), StatusFilter::All);
    assert!(StatusFilter::All.predicate().is_none());
  }

  #[test]
  fn status_filters_by_exact_label() {
    let filter = StatusFilter::from("in progress");
    assert_eq!(filter, StatusFilter::Is(TaskStatus::InProgress));
    let predicate = filter.predicate().unwrap();
    assert_eq!(predicate.field_name, "status_c");
    assert_eq!(predicate.values, vec![serde_json::json!("In Progress")]);
  }
}
