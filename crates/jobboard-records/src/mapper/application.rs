use jobboard_codec::{encode_list, encode_structured, encode_timestamp};
use jobboard_core::{
  Record, RecordId,
  application::{Application, ApplicationInput, ApplicationStatus},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{
    Payload, WriteMode, label, list, now, record_id, reference, require_ref,
    structured, text, timestamp,
  },
};

const JOB: &[&str] = &["job_id_c"];
const CANDIDATE: &[&str] = &["candidate_id_c"];

fn display_name(job_id: RecordId) -> String { format!("Application for {job_id}") }

impl Entity for Application {
  const TABLE: &'static str = "application_c";
  const NOUN: &'static str = "application";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "job_id_c",
    "candidate_id_c",
    "status_c",
    "applied_date_c",
    "cover_letter_c",
    "notes_c",
    "interviews_c",
    TAGS,
  ];

  type Input = ApplicationInput;

  fn to_domain(record: Record) -> Result<Self> {
    let job_id = reference(&record, JOB);
    let name = Some(text(&record, &[NAME]))
      .filter(|n| !n.is_empty())
      .or_else(|| job_id.map(display_name))
      .unwrap_or_default();

    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      name,
      job_id,
      candidate_id: reference(&record, CANDIDATE),
      status: label(&record, &["status_c"]),
      applied_date: timestamp(&record, &["applied_date_c", "CreatedOn"]),
      cover_letter: text(&record, &["cover_letter_c"]),
      notes: text(&record, &["notes_c"]),
      interviews: structured(&record, &["interviews_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &ApplicationInput, mode: WriteMode) -> Result<Record> {
    if mode == WriteMode::Create {
      require_ref(input.job_id, "application job")?;
      require_ref(input.candidate_id, "application candidate")?;
    }

    let name = input
      .name
      .clone()
      .filter(|n| !n.trim().is_empty())
      .or_else(|| input.job_id.map(display_name));

    Ok(
      Payload::new(mode)
        .field(NAME, name, String::new)
        .optional("job_id_c", input.job_id)
        .optional("candidate_id_c", input.candidate_id)
        .field(
          "status_c",
          input.status.as_ref().map(ApplicationStatus::to_string),
          || ApplicationStatus::default().to_string(),
        )
        .field("applied_date_c", input.applied_date.map(encode_timestamp), now)
        .field("cover_letter_c", input.cover_letter.clone(), String::new)
        .field("notes_c", input.notes.clone(), String::new)
        .field(
          "interviews_c",
          input.interviews.as_ref().map(encode_structured),
          String::new,
        )
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }
}
