//! Conversations, message threads, and sending.

use std::sync::Arc;

use chrono::Utc;
use jobboard_core::{
  RecordId,
  client::RecordClient,
  message::{Conversation, ConversationInput, Message, MessageInput},
  record::Predicate,
};
use tracing::{debug, warn};

use super::Repository;
use crate::{Result, mapper::message::CONVERSATION_ID};

/// Messages and the conversations that summarise them.
pub struct Messaging<C> {
  messages:      Repository<C, Message>,
  conversations: Repository<C, Conversation>,
}

impl<C: RecordClient> Messaging<C> {
  pub fn new(client: Arc<C>) -> Self {
    Self {
      messages:      Repository::new(Arc::clone(&client)),
      conversations: Repository::new(client),
    }
  }

  pub fn messages(&self) -> &Repository<C, Message> { &self.messages }

  pub fn conversations(&self) -> &Repository<C, Conversation> {
    &self.conversations
  }

  /// Every conversation, newest first.
  pub async fn list_conversations(&self) -> Vec<Conversation> {
    self.conversations.list().await
  }

  /// Messages of one conversation, oldest first.
  pub async fn thread(&self, conversation_id: RecordId) -> Vec<Message> {
    self
      .messages
      .list_where(vec![Predicate::equal_to(CONVERSATION_ID, conversation_id)])
      .await
  }

  /// Create a message, then refresh its conversation's summary.
  ///
  /// The summary update runs only after the message exists. Its outcome is
  /// logged and never changes the result of the send.
  pub async fn send(&self, input: &MessageInput) -> Result<Option<Message>> {
    let Some(message) = self.messages.create(input).await? else {
      return Ok(None);
    };

    let conversation_id = input.conversation_id.or(message.conversation_id);
    if let Some(conversation_id) = conversation_id {
      self.refresh_summary(conversation_id, input, &message).await;
    }

    Ok(Some(message))
  }

  async fn refresh_summary(
    &self,
    conversation_id: RecordId,
    input: &MessageInput,
    message: &Message,
  ) {
    let summary = ConversationInput {
      last_message: Some(
        input.content.clone().unwrap_or_else(|| message.content.clone()),
      ),
      last_message_time: Some(message.timestamp.unwrap_or_else(Utc::now)),
      ..ConversationInput::default()
    };

    match self.conversations.update(conversation_id, &summary).await {
      Ok(Some(_)) => {
        debug!(%conversation_id, message = %message.id, "conversation summary updated");
      }
      Ok(None) => {
        warn!(%conversation_id, message = %message.id, "conversation summary not updated");
      }
      Err(err) => {
        warn!(
          %conversation_id,
          message = %message.id,
          error = %err,
          "conversation summary update failed"
        );
      }
    }
  }

  /// Flag one message as read. `false` when the backend refused the record.
  pub async fn mark_as_read(&self, id: RecordId) -> Result<bool> {
    let input = MessageInput {
      read: Some(true),
      ..MessageInput::default()
    };
    Ok(self.messages.update(id, &input).await?.is_some())
  }
}
