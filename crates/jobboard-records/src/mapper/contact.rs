use jobboard_core::{
  Record,
  contact::{ContactMessage, ContactMessageInput},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{Payload, WriteMode, record_id, require_text, text},
};

const FORM_TAG: &str = "contact-form";

impl Entity for ContactMessage {
  const TABLE: &'static str = "contact_us_c";
  const NOUN: &'static str = "contact message";
  const FIELDS: &'static [&'static str] =
    &["Id", NAME, "name_c", "email_c", "subject_c", "message_c", TAGS];

  type Input = ContactMessageInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      name: text(&record, &["name_c"]),
      email: text(&record, &["email_c"]),
      subject: text(&record, &["subject_c"]),
      message: text(&record, &["message_c"]),
      record,
    })
  }

  fn to_payload(input: &ContactMessageInput, mode: WriteMode) -> Result<Record> {
    let name = require_text(Some(input.name.as_str()), "name")?;
    let email = require_text(Some(input.email.as_str()), "email")?;
    let subject = require_text(Some(input.subject.as_str()), "subject")?;
    let message = require_text(Some(input.message.as_str()), "message")?;

    Ok(
      Payload::new(mode)
        .set(NAME, format!("Contact from {name}"))
        .set("name_c", name)
        .set("email_c", email)
        .set("subject_c", subject)
        .set("message_c", message)
        .set(TAGS, FORM_TAG)
        .finish(),
    )
  }
}
