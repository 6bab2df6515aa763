//! Saved jobs and saved candidates, scoped to one owning user.
//!
//! Uniqueness of a (user, target) pair is checked with a query before each
//! insert. The backend offers no conditional write, so two concurrent
//! toggles of the same pair can still double-add or double-remove.

use std::sync::Arc;

use jobboard_core::{
  RecordId,
  client::RecordClient,
  record::Predicate,
  saved::{SaveInput, SavedCandidate, SavedJob},
};
use tracing::warn;

use super::Repository;
use crate::{
  Error, Result,
  mapper::{Bookmark, saved::USER_ID},
};

/// Bookmarks of kind `B` owned by one user.
pub struct SavedItems<C, B> {
  repo:    Repository<C, B>,
  user_id: RecordId,
}

pub type SavedJobs<C> = SavedItems<C, SavedJob>;
pub type SavedCandidates<C> = SavedItems<C, SavedCandidate>;

impl<C: RecordClient, B: Bookmark> SavedItems<C, B> {
  pub fn new(client: Arc<C>, user_id: RecordId) -> Self {
    Self {
      repo: Repository::new(client),
      user_id,
    }
  }

  pub fn repository(&self) -> &Repository<C, B> { &self.repo }

  pub fn user_id(&self) -> RecordId { self.user_id }

  fn owned(&self) -> Predicate { Predicate::equal_to(USER_ID, self.user_id) }

  fn pair(&self, target: RecordId) -> Vec<Predicate> {
    vec![self.owned(), Predicate::equal_to(B::TARGET_FIELD, target)]
  }

  /// The user's bookmarks, newest first.
  pub async fn list(&self) -> Vec<B> { self.repo.list_where(vec![self.owned()]).await }

  pub async fn count(&self) -> usize { self.repo.count(vec![self.owned()]).await }

  /// Whether `target` is bookmarked. False when the backend is unavailable.
  pub async fn is_saved(&self, target: RecordId) -> bool {
    self.repo.exists(self.pair(target)).await
  }

  /// The bookmark for `target`, if any.
  pub async fn get_by_target(&self, target: RecordId) -> Option<B> {
    self.repo.list_where(self.pair(target)).await.into_iter().next()
  }

  /// Bookmark `target`. Refuses a pair that is already saved.
  pub async fn add(&self, target: RecordId) -> Result<Option<B>> {
    if self.is_saved(target).await {
      warn!(table = B::TABLE, %target, user = %self.user_id, "already saved");
      return Err(Error::AlreadySaved {
        entity: B::NOUN,
        target,
      });
    }
    self.insert(target).await
  }

  async fn insert(&self, target: RecordId) -> Result<Option<B>> {
    let input = SaveInput {
      user_id:   self.user_id,
      target_id: target,
      saved_at:  None,
    };
    self.repo.create(&input).await
  }

  /// Remove the bookmark for `target`. `false` when there was none.
  pub async fn remove(&self, target: RecordId) -> Result<bool> {
    match self.get_by_target(target).await {
      Some(saved) => self.repo.delete(saved.id()).await,
      None => Ok(false),
    }
  }

  /// Remove the bookmark if present, add it if absent. Returns whether
  /// `target` is saved afterwards.
  ///
  /// Check-then-act: not atomic against a concurrent toggle of the same pair.
  pub async fn toggle(&self, target: RecordId) -> Result<bool> {
    match self.get_by_target(target).await {
      Some(saved) => Ok(!self.repo.delete(saved.id()).await?),
      None => Ok(self.insert(target).await?.is_some()),
    }
  }
}
