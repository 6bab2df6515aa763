use jobboard_codec::{encode_date, encode_list};
use jobboard_core::{
  Record,
  record::OrderBy,
  task::{Task, TaskInput, TaskStatus},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{
    Payload, WriteMode, date, label, list, record_id, reject_blank,
    require_text, text, timestamp,
  },
};

pub(crate) const STATUS: &str = "status_c";
const DUE_DATE: &str = "due_date_c";

impl Entity for Task {
  const TABLE: &'static str = "task_c";
  const NOUN: &'static str = "task";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "title_c",
    "description_c",
    STATUS,
    DUE_DATE,
    "CreatedOn",
    "ModifiedOn",
    TAGS,
  ];

  type Input = TaskInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      title: text(&record, &["title_c", NAME]),
      description: text(&record, &["description_c"]),
      status: label(&record, &[STATUS]),
      due_date: date(&record, &[DUE_DATE]),
      created_on: timestamp(&record, &["CreatedOn"]),
      modified_on: timestamp(&record, &["ModifiedOn"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &TaskInput, mode: WriteMode) -> Result<Record> {
    let title = input.title.as_deref();
    match mode {
      WriteMode::Create => {
        require_text(title, "task title")?;
      }
      WriteMode::Update(_) => reject_blank(title, "task title")?,
    }

    Ok(
      Payload::new(mode)
        .optional(NAME, input.title.clone())
        .optional("title_c", input.title.clone())
        .field("description_c", input.description.clone(), String::new)
        .field(
          STATUS,
          input.status.as_ref().map(TaskStatus::to_string),
          || TaskStatus::default().to_string(),
        )
        .optional(DUE_DATE, input.due_date.map(encode_date))
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }

  /// Soonest due first.
  fn default_order() -> Vec<OrderBy> { vec![OrderBy::asc(DUE_DATE)] }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use jobboard_core::RecordId;
  use serde_json::{Value, json};

  use super::*;
  use crate::Error;

  #[test]
  fn title_is_required_on_create() {
    for title in [None, Some(""), Some("   ")] {
      let input = TaskInput {
        title: title.map(str::to_owned),
        ..TaskInput::default()
      };
      assert!(matches!(
        Task::to_payload(&input, WriteMode::Create),
        Err(Error::Validation(_))
      ));
    }
  }

  #[test]
  fn update_may_omit_title_but_not_blank_it() {
    let id = RecordId::new(2).unwrap();
    let status_only = TaskInput {
      status: Some(TaskStatus::Completed),
      ..TaskInput::default()
    };
    assert_eq!(
      Value::Object(Task::to_payload(&status_only, WriteMode::Update(id)).unwrap()),
      json!({ "Id": 2, "status_c": "Completed" })
    );

    let blank = TaskInput {
      title: Some(String::new()),
      ..TaskInput::default()
    };
    assert!(Task::to_payload(&blank, WriteMode::Update(id)).is_err());
  }

  #[test]
  fn create_writes_date_only_due() {
    let payload = Task::to_payload(
      &TaskInput {
        title: Some("Draft offer letter".into()),
        due_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..TaskInput::default()
      },
      WriteMode::Create,
    )
    .unwrap();

    assert_eq!(payload.get("Name"), Some(&json!("Draft offer letter")));
    assert_eq!(payload.get("status_c"), Some(&json!("New")));
    assert_eq!(payload.get("due_date_c"), Some(&json!("2024-01-01")));
  }
}
