use jobboard_codec::{encode_list, encode_structured};
use jobboard_core::{
  Record,
  candidate::{Candidate, CandidateInput},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{Payload, WriteMode, list, record_id, structured, text},
};

const CANDIDATE_NAME: &[&str] = &["name_c", NAME];

impl Entity for Candidate {
  const TABLE: &'static str = "candidate_c";
  const NOUN: &'static str = "candidate";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "name_c",
    "email_c",
    "phone_c",
    "location_c",
    "description_c",
    "education_c",
    "resume_c",
    "preferences_c",
    "skills_c",
    "experience_c",
    TAGS,
  ];

  type Input = CandidateInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      name: text(&record, CANDIDATE_NAME),
      email: text(&record, &["email_c"]),
      phone: text(&record, &["phone_c"]),
      location: text(&record, &["location_c"]),
      description: text(&record, &["description_c"]),
      education: text(&record, &["education_c"]),
      resume: text(&record, &["resume_c"]),
      preferences: text(&record, &["preferences_c"]),
      skills: list(&record, &["skills_c"]),
      experience: structured(&record, &["experience_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &CandidateInput, mode: WriteMode) -> Result<Record> {
    Ok(
      Payload::new(mode)
        .field(NAME, input.name.clone(), String::new)
        .field("name_c", input.name.clone(), String::new)
        .field("email_c", input.email.clone(), String::new)
        .field("phone_c", input.phone.clone(), String::new)
        .field("location_c", input.location.clone(), String::new)
        .field("description_c", input.description.clone(), String::new)
        .field("education_c", input.education.clone(), String::new)
        .field("resume_c", input.resume.clone(), String::new)
        .field("preferences_c", input.preferences.clone(), String::new)
        .field("skills_c", input.skills.as_deref().map(encode_list), String::new)
        .field(
          "experience_c",
          input.experience.as_ref().map(encode_structured),
          String::new,
        )
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }
}

#[cfg(test)]
mod tests {
  use jobboard_core::candidate::ExperienceEntry;
  use serde_json::{Value, json};

  use super::*;

  fn row(value: Value) -> Record {
    match value {
      Value::Object(map) => map,
      _ => unreachable!(),
    }
  }

  #[test]
  fn name_prefers_custom_column() {
    let ada = Candidate::to_domain(row(json!({ "Id": 1, "name_c": "Ada", "Name": "X" })));
    assert_eq!(ada.unwrap().name, "Ada");
    let x = Candidate::to_domain(row(json!({ "Id": 1, "Name": "X" })));
    assert_eq!(x.unwrap().name, "X");
    let none = Candidate::to_domain(row(json!({ "Id": 1 })));
    assert_eq!(none.unwrap().name, "");
  }

  #[test]
  fn skills_and_experience_decode() {
    let candidate = Candidate::to_domain(row(json!({
      "Id": 2,
      "skills_c": " Rust ,  SQL,, ",
      "experience_c": "Engineer at Acme\n\nLead at Initech",
    })))
    .unwrap();

    assert_eq!(candidate.skills, vec!["Rust", "SQL"]);
    assert_eq!(
      candidate.experience,
      vec![
        ExperienceEntry::from_line("Engineer at Acme"),
        ExperienceEntry::from_line("Lead at Initech"),
      ]
    );
  }

  #[test]
  fn already_parsed_experience_is_accepted() {
    let candidate = Candidate::to_domain(row(json!({
      "Id": 2,
      "experience_c": [{ "position": "Engineer", "company": "Acme", "duration": 3 }],
    })))
    .unwrap();
    assert_eq!(candidate.experience[0].duration, 3);
  }

  #[test]
  fn skills_encode_as_comma_list() {
    let payload = Candidate::to_payload(
      &CandidateInput {
        skills: Some(vec!["Rust".into(), " ".into(), "Go ".into()]),
        ..CandidateInput::default()
      },
      WriteMode::Create,
    )
    .unwrap();
    assert_eq!(payload.get("skills_c"), Some(&json!("Rust,Go")));
    assert_eq!(payload.get("experience_c"), Some(&json!("")));
  }
}
