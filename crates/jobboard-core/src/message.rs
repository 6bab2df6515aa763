//! Conversations and the messages inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, RecordId};

/// A thread between the current user and one participant.
///
/// The `last_message*` fields are a denormalised summary refreshed after each
/// message send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
  pub id:                RecordId,
  pub participant_name:  String,
  pub job_title:         String,
  pub last_message:      String,
  pub last_message_time: Option<DateTime<Utc>>,
  pub unread_count:      u32,
  pub tags:              Vec<String>,
  #[serde(skip)]
  pub record:            Record,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationInput {
  pub participant_name:  Option<String>,
  pub job_title:         Option<String>,
  pub last_message:      Option<String>,
  pub last_message_time: Option<DateTime<Utc>>,
  pub unread_count:      Option<u32>,
  pub tags:              Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub id:              RecordId,
  pub conversation_id: Option<RecordId>,
  pub sender_id:       Option<RecordId>,
  pub content:         String,
  pub timestamp:       Option<DateTime<Utc>>,
  pub read:            bool,
  pub tags:            Vec<String>,
  #[serde(skip)]
  pub record:          Record,
}

/// Input to a message send. Both references are required on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInput {
  pub conversation_id: Option<RecordId>,
  pub sender_id:       Option<RecordId>,
  pub content:         Option<String>,
  pub timestamp:       Option<DateTime<Utc>>,
  pub read:            Option<bool>,
  pub tags:            Option<Vec<String>>,
}
