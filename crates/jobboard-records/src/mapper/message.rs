use chrono::Utc;
use jobboard_codec::{encode_list, encode_timestamp};
use jobboard_core::{
  Record,
  message::{Conversation, ConversationInput, Message, MessageInput},
  record::OrderBy,
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{
    Payload, WriteMode, count, flag, list, now, record_id, reference,
    require_ref, text, timestamp,
  },
};

pub(crate) const CONVERSATION_ID: &str = "conversation_id_c";
pub(crate) const TIMESTAMP: &str = "timestamp_c";

impl Entity for Conversation {
  const TABLE: &'static str = "conversation_c";
  const NOUN: &'static str = "conversation";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "participant_name_c",
    "job_title_c",
    "last_message_c",
    "last_message_time_c",
    "unread_count_c",
    TAGS,
  ];

  type Input = ConversationInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      participant_name: text(&record, &["participant_name_c", NAME]),
      job_title: text(&record, &["job_title_c"]),
      last_message: text(&record, &["last_message_c"]),
      last_message_time: timestamp(&record, &["last_message_time_c"]),
      unread_count: count(&record, &["unread_count_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &ConversationInput, mode: WriteMode) -> Result<Record> {
    Ok(
      Payload::new(mode)
        .optional(NAME, input.participant_name.clone())
        .field("participant_name_c", input.participant_name.clone(), String::new)
        .field("job_title_c", input.job_title.clone(), String::new)
        .field("last_message_c", input.last_message.clone(), String::new)
        .field(
          "last_message_time_c",
          input.last_message_time.map(encode_timestamp),
          now,
        )
        .field("unread_count_c", input.unread_count, || 0)
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }
}

impl Entity for Message {
  const TABLE: &'static str = "message_c";
  const NOUN: &'static str = "message";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    CONVERSATION_ID,
    "sender_id_c",
    "content_c",
    TIMESTAMP,
    "read_c",
    TAGS,
  ];

  type Input = MessageInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      conversation_id: reference(&record, &[CONVERSATION_ID]),
      sender_id: reference(&record, &["sender_id_c"]),
      content: text(&record, &["content_c"]),
      timestamp: timestamp(&record, &[TIMESTAMP, "CreatedOn"]),
      read: flag(&record, &["read_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &MessageInput, mode: WriteMode) -> Result<Record> {
    if mode == WriteMode::Create {
      require_ref(input.conversation_id, "message conversation")?;
      require_ref(input.sender_id, "message sender")?;
    }

    Ok(
      Payload::new(mode)
        .field(NAME, None, || format!("Message {}", Utc::now().timestamp_millis()))
        .optional(CONVERSATION_ID, input.conversation_id)
        .optional("sender_id_c", input.sender_id)
        .field("content_c", input.content.clone(), String::new)
        .field(TIMESTAMP, input.timestamp.map(encode_timestamp), now)
        .field("read_c", input.read, || false)
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }

  /// Threads read oldest first.
  fn default_order() -> Vec<OrderBy> {
    vec![OrderBy::asc(TIMESTAMP), OrderBy::asc("Id")]
  }
}
