//! Record normalisation and batch mutation for the job board.
//!
//! Sits between the presentation layer and a [`RecordClient`]: repositories
//! build outbound payloads with the per-entity field mappers, submit
//! single-record batches, reduce the batch response, and decode rows back
//! into [`jobboard_core`] entities.
//!
//! Reads never fail upward: a backend or transport error is logged and the
//! read degrades to an empty value. Writes log and then return the error.

mod encode;

pub mod batch;
pub mod error;
pub mod mapper;
pub mod repo;

use std::sync::Arc;

use jobboard_core::{
  RecordId, application::Application, candidate::Candidate,
  client::RecordClient, company::Company, job::Job,
};

pub use encode::WriteMode;
pub use error::{Error, Result};
pub use mapper::Entity;
pub use repo::{
  Repository, contact::ContactForm, message::Messaging,
  saved::{SavedCandidates, SavedItems, SavedJobs},
  task::{StatusFilter, Tasks},
};

/// Every repository, built over one shared client.
pub struct JobBoard<C> {
  pub jobs:             Repository<C, Job>,
  pub candidates:       Repository<C, Candidate>,
  pub companies:        Repository<C, Company>,
  pub applications:     Repository<C, Application>,
  pub messaging:        Messaging<C>,
  pub tasks:            Tasks<C>,
  pub saved_jobs:       SavedJobs<C>,
  pub saved_candidates: SavedCandidates<C>,
  pub contact:          ContactForm<C>,
}

impl<C: RecordClient> JobBoard<C> {
  /// `user_id` owns the saved-item lists.
  pub fn new(client: Arc<C>, user_id: RecordId) -> Self {
    Self {
      jobs:             Repository::new(client.clone()),
      candidates:       Repository::new(client.clone()),
      companies:        Repository::new(client.clone()),
      applications:     Repository::new(client.clone()),
      messaging:        Messaging::new(client.clone()),
      tasks:            Repository::new(client.clone()),
      saved_jobs:       SavedItems::new(client.clone(), user_id),
      saved_candidates: SavedItems::new(client.clone(), user_id),
      contact:          ContactForm::new(client),
    }
  }
}

#[cfg(test)]
mod memory;
