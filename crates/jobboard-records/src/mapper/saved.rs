use jobboard_codec::encode_timestamp;
use jobboard_core::{
  Record, RecordId,
  saved::{SaveInput, SavedCandidate, SavedJob},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{Payload, WriteMode, now, record_id, reference, timestamp},
};

pub(crate) const USER_ID: &str = "user_id_c";
const SAVED_AT: &str = "saved_at_c";

/// A saved-item entity: one (user, target) bookmark.
pub trait Bookmark: Entity<Input = SaveInput> {
  /// Foreign-key column naming the bookmarked row.
  const TARGET_FIELD: &'static str;
  /// Display-name prefix, e.g. `Saved Job`.
  const LABEL: &'static str;

  fn id(&self) -> RecordId;

  fn target_id(&self) -> Option<RecordId>;
}

fn payload<B: Bookmark>(input: &SaveInput, mode: WriteMode) -> Record {
  Payload::new(mode)
    .set(NAME, format!("{} {}", B::LABEL, input.target_id))
    .set(USER_ID, input.user_id)
    .set(B::TARGET_FIELD, input.target_id)
    .field(SAVED_AT, input.saved_at.map(encode_timestamp), now)
    .field(TAGS, None, String::new)
    .finish()
}

impl Entity for SavedJob {
  const TABLE: &'static str = "saved_job_c";
  const NOUN: &'static str = "saved job";
  const FIELDS: &'static [&'static str] =
    &["Id", NAME, USER_ID, "job_id_c", SAVED_AT, TAGS];

  type Input = SaveInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      user_id: reference(&record, &[USER_ID]),
      job_id: reference(&record, &[Self::TARGET_FIELD]),
      saved_at: timestamp(&record, &[SAVED_AT, "CreatedOn"]),
      record,
    })
  }

  fn to_payload(input: &SaveInput, mode: WriteMode) -> Result<Record> {
    Ok(payload::<Self>(input, mode))
  }
}

impl Bookmark for SavedJob {
  const TARGET_FIELD: &'static str = "job_id_c";
  const LABEL: &'static str = "Saved Job";

  fn id(&self) -> RecordId { self.id }

  fn target_id(&self) -> Option<RecordId> { self.job_id }
}

impl Entity for SavedCandidate {
  const TABLE: &'static str = "saved_candidate_c";
  const NOUN: &'static str = "saved candidate";
  const FIELDS: &'static [&'static str] =
    &["Id", NAME, USER_ID, "candidate_id_c", SAVED_AT, TAGS];

  type Input = SaveInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      user_id: reference(&record, &[USER_ID]),
      candidate_id: reference(&record, &[Self::TARGET_FIELD]),
      saved_at: timestamp(&record, &[SAVED_AT, "CreatedOn"]),
      record,
    })
  }

  fn to_payload(input: &SaveInput, mode: WriteMode) -> Result<Record> {
    Ok(payload::<Self>(input, mode))
  }
}

impl Bookmark for SavedCandidate {
  const TARGET_FIELD: &'static str = "candidate_id_c";
  const LABEL: &'static str = "Saved Candidate";

  fn id(&self) -> RecordId { self.id }

  fn target_id(&self) -> Option<RecordId> { self.candidate_id }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn payload_names_the_target() {
    let input = SaveInput {
      user_id:   RecordId::new(1).unwrap(),
      target_id: RecordId::new(7).unwrap(),
      saved_at:  None,
    };
    let record = SavedJob::to_payload(&input, WriteMode::Create).unwrap();

    assert_eq!(record.get("Name"), Some(&json!("Saved Job 7")));
    assert_eq!(record.get("user_id_c"), Some(&json!(1)));
    assert_eq!(record.get("job_id_c"), Some(&json!(7)));
    assert_eq!(record.get("Tags"), Some(&json!("")));
    assert!(record.contains_key("saved_at_c"));
  }
}
