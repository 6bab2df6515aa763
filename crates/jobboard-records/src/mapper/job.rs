use jobboard_codec::{encode_list, encode_structured, encode_timestamp};
use jobboard_core::{
  Record,
  job::{Job, JobInput, JobStatus, JobType},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{
    Payload, WriteMode, label, list, now, record_id, structured, text,
    timestamp,
  },
};

const TITLE: &[&str] = &["title_c", NAME];
const POSTED: &[&str] = &["posted_date_c", "CreatedOn"];

impl Entity for Job {
  const TABLE: &'static str = "job_c";
  const NOUN: &'static str = "job";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "title_c",
    "company_c",
    "description_c",
    "requirements_c",
    "location_c",
    "salary_range_c",
    "type_c",
    "posted_date_c",
    "status_c",
    "CreatedOn",
    TAGS,
  ];

  type Input = JobInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      title: text(&record, TITLE),
      company: text(&record, &["company_c"]),
      description: text(&record, &["description_c"]),
      requirements: text(&record, &["requirements_c"]),
      location: text(&record, &["location_c"]),
      job_type: label(&record, &["type_c"]),
      status: label(&record, &["status_c"]),
      posted_date: timestamp(&record, POSTED),
      salary_range: structured(&record, &["salary_range_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &JobInput, mode: WriteMode) -> Result<Record> {
    Ok(
      Payload::new(mode)
        .field(NAME, input.title.clone(), String::new)
        .field("title_c", input.title.clone(), String::new)
        .field("company_c", input.company.clone(), String::new)
        .field("description_c", input.description.clone(), String::new)
        .field("requirements_c", input.requirements.clone(), String::new)
        .field("location_c", input.location.clone(), String::new)
        .field(
          "salary_range_c",
          input.salary_range.as_ref().map(encode_structured),
          String::new,
        )
        .field(
          "type_c",
          input.job_type.as_ref().map(JobType::to_string),
          || JobType::default().to_string(),
        )
        .field(
          "status_c",
          input.status.as_ref().map(JobStatus::to_string),
          || JobStatus::default().to_string(),
        )
        .field("posted_date_c", input.posted_date.map(encode_timestamp), now)
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }
}

#[cfg(test)]
mod tests {
  use jobboard_core::{RecordId, Structured, job::SalaryRange};
  use serde_json::{Value, json};

  use super::*;

  fn row(value: Value) -> Record {
    match value {
      Value::Object(map) => map,
      _ => unreachable!(),
    }
  }

  #[test]
  fn decodes_with_defaults_and_fallbacks() {
    let job = Job::to_domain(row(json!({
      "Id": 4,
      "Name": "Backend Engineer",
      "salary_range_c": "$50,000 - $80,000",
      "type_c": "part-time",
      "Tags": "rust, remote,,",
      "extra_c": "kept",
    })))
    .unwrap();

    assert_eq!(job.id, RecordId::new(4).unwrap());
    assert_eq!(job.title, "Backend Engineer");
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.job_type, JobType::PartTime);
    assert_eq!(job.salary_range, SalaryRange::new(50_000, 80_000));
    assert_eq!(job.tags, vec!["rust", "remote"]);
    assert_eq!(job.record.get("extra_c"), Some(&json!("kept")));
  }

  #[test]
  fn create_fills_defaults() {
    let payload = Job::to_payload(
      &JobInput {
        title: Some("Designer".into()),
        salary_range: Some(Structured::Text("DOE".into())),
        ..JobInput::default()
      },
      WriteMode::Create,
    )
    .unwrap();

    assert_eq!(payload.get("Name"), Some(&json!("Designer")));
    assert_eq!(payload.get("salary_range_c"), Some(&json!("DOE")));
    assert_eq!(payload.get("type_c"), Some(&json!("Full-time")));
    assert_eq!(payload.get("status_c"), Some(&json!("Active")));
    assert!(payload.get("posted_date_c").is_some_and(Value::is_string));
    assert!(!payload.contains_key("Id"));
  }

  #[test]
  fn update_is_partial() {
    let id = RecordId::new(4).unwrap();
    let payload = Job::to_payload(
      &JobInput {
        status: Some(JobStatus::Closed),
        salary_range: Some(SalaryRange::new(1, 2).into()),
        ..JobInput::default()
      },
      WriteMode::Update(id),
    )
    .unwrap();

    assert_eq!(
      Value::Object(payload),
      json!({
        "Id": 4,
        "status_c": "Closed",
        "salary_range_c": "{\"min\":1,\"max\":2}",
      })
    );
  }
}
