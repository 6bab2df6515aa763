use std::sync::Arc;

use jobboard_core::{
  client::RecordClient,
  contact::{ContactMessage, ContactMessageInput},
};

use super::Repository;
use crate::Result;

/// The public contact form. Write-only.
pub struct ContactForm<C> {
  repo: Repository<C, ContactMessage>,
}

impl<C: RecordClient> ContactForm<C> {
  pub fn new(client: Arc<C>) -> Self {
    Self {
      repo: Repository::new(client),
    }
  }

  /// Store a submission. Every field must be non-empty.
  pub async fn submit(
    &self,
    input: &ContactMessageInput,
  ) -> Result<Option<ContactMessage>> {
    self.repo.create(input).await
  }
}
