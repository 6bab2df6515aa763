//! [`Repository`]: the generic list/get/create/update/delete surface every
//! entity shares, plus the entity-specific extensions in the submodules.

pub mod contact;
pub mod message;
pub mod saved;
pub mod task;

use std::{marker::PhantomData, sync::Arc};

use jobboard_core::{
  Record, RecordId,
  client::RecordClient,
  record::{
    BatchResponse, CreateParams, DeleteParams, FetchParams, OrderBy, Predicate,
    RecordParams, UpdateParams, fields,
  },
};
use tracing::{debug, error, warn};

use crate::{
  Error, Result,
  batch::{self, BatchOutcome},
  encode::WriteMode,
  mapper::{Entity, NAME},
};

// ─── Repository ──────────────────────────────────────────────────────────────

/// Table access for one entity over an injected [`RecordClient`].
///
/// Cloning is cheap; the client is shared.
pub struct Repository<C, E> {
  client:  Arc<C>,
  _entity: PhantomData<fn() -> E>,
}

impl<C, E> Clone for Repository<C, E> {
  fn clone(&self) -> Self {
    Self {
      client:  Arc::clone(&self.client),
      _entity: PhantomData,
    }
  }
}

impl<C: RecordClient, E: Entity> Repository<C, E> {
  pub fn new(client: Arc<C>) -> Self {
    Self {
      client,
      _entity: PhantomData,
    }
  }

  pub fn client(&self) -> &Arc<C> { &self.client }

  fn transport(op: &'static str, err: C::Error) -> Error {
    error!(table = E::TABLE, op, error = %err, "record client call failed");
    Error::Transport(Box::new(err))
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Every row, in the entity's default order. Empty on any failure.
  pub async fn list(&self) -> Vec<E> { self.list_where(Vec::new()).await }

  /// Rows matching all `predicates`, in the entity's default order.
  pub async fn list_where(&self, predicates: Vec<Predicate>) -> Vec<E> {
    self.query(predicates, E::default_order()).await
  }

  /// Rows matching `predicates` in an explicit order.
  pub async fn query(
    &self,
    predicates: Vec<Predicate>,
    order_by: Vec<OrderBy>,
  ) -> Vec<E> {
    let params = FetchParams {
      fields: fields(E::FIELDS),
      predicates,
      order_by,
    };
    let Some(rows) = self.fetch(&params).await else {
      return Vec::new();
    };

    rows
      .into_iter()
      .filter_map(|row| match E::to_domain(row) {
        Ok(entity) => Some(entity),
        Err(err) => {
          warn!(table = E::TABLE, error = %err, "skipping undecodable row");
          None
        }
      })
      .collect()
  }

  /// Number of rows matching `predicates`. Zero on any failure.
  pub async fn count(&self, predicates: Vec<Predicate>) -> usize {
    let params = FetchParams {
      fields: fields(&[NAME]),
      predicates,
      order_by: Vec::new(),
    };
    self.fetch(&params).await.map_or(0, |rows| rows.len())
  }

  /// Whether any row matches `predicates`. False on any failure.
  pub async fn exists(&self, predicates: Vec<Predicate>) -> bool {
    self.count(predicates).await > 0
  }

  /// Issue a fetch, logging and swallowing every failure.
  async fn fetch(&self, params: &FetchParams) -> Option<Vec<Record>> {
    debug!(
      table = E::TABLE,
      predicates = params.predicates.len(),
      "fetching records"
    );

    match self.client.fetch_records(E::TABLE, params).await {
      Err(err) => {
        error!(table = E::TABLE, error = %err, "fetch failed");
        None
      }
      Ok(response) if !response.success => {
        error!(
          table = E::TABLE,
          message = response.message.as_deref().unwrap_or_default(),
          "backend rejected fetch"
        );
        None
      }
      Ok(response) => Some(response.data.unwrap_or_default()),
    }
  }

  /// One row by id.
  ///
  /// A refusal, an absent row and an empty row are all [`Error::NotFound`];
  /// a failed call is [`Error::Transport`].
  pub async fn get_by_id(&self, id: RecordId) -> Result<E> {
    let params = RecordParams::new(E::FIELDS);
    let response = self
      .client
      .get_record_by_id(E::TABLE, id, &params)
      .await
      .map_err(|err| Self::transport("get", err))?;

    let found = response.success;
    let row = response.data.filter(|row| found && !row.is_empty());
    match row {
      Some(row) => E::to_domain(row),
      None => {
        debug!(table = E::TABLE, %id, "record not found");
        Err(Error::NotFound {
          entity: E::NOUN,
          id,
        })
      }
    }
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Insert one row. `Ok(None)` when the backend accepted the request but
  /// the record itself failed.
  pub async fn create(&self, input: &E::Input) -> Result<Option<E>> {
    let params = CreateParams {
      records: vec![E::to_payload(input, WriteMode::Create)?],
    };
    let response = self
      .client
      .create_record(E::TABLE, &params)
      .await
      .map_err(|err| Self::transport("create", err))?;
    self.settle("create", response)
  }

  /// Patch one row. Fields absent from `input` are left untouched.
  pub async fn update(&self, id: RecordId, input: &E::Input) -> Result<Option<E>> {
    let params = UpdateParams {
      records: vec![E::to_payload(input, WriteMode::Update(id))?],
    };
    let response = self
      .client
      .update_record(E::TABLE, &params)
      .await
      .map_err(|err| Self::transport("update", err))?;
    self.settle("update", response)
  }

  /// Remove one row. A refusal is logged and reads as `false`.
  pub async fn delete(&self, id: RecordId) -> Result<bool> {
    let params = DeleteParams {
      record_ids: vec![id],
    };
    let response = self
      .client
      .delete_record(E::TABLE, &params)
      .await
      .map_err(|err| Self::transport("delete", err))?;

    let outcome = batch::reduce(Some(response));
    if !outcome.accepted {
      error!(
        table = E::TABLE,
        %id,
        message = %outcome.summary(),
        "backend rejected delete"
      );
      return Ok(false);
    }
    log_failures::<E>("delete", &outcome);
    Ok(outcome.ok)
  }

  fn settle(&self, op: &'static str, response: BatchResponse) -> Result<Option<E>> {
    let outcome = batch::reduce(Some(response));
    if !outcome.accepted {
      let message = outcome.summary();
      error!(table = E::TABLE, op, %message, "backend rejected write");
      return Err(Error::Rejected {
        entity: E::NOUN,
        op,
        message,
      });
    }

    log_failures::<E>(op, &outcome);
    outcome.data.map(E::to_domain).transpose()
  }
}

fn log_failures<E: Entity>(op: &'static str, outcome: &BatchOutcome) {
  for failure in &outcome.failures {
    warn!(table = E::TABLE, op, %failure, "record write failed");
  }
}
