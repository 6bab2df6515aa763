//! The `RecordClient` trait: the fixed interface to the remote backend.
//!
//! Implemented by transports (e.g. `jobboard-http`) and by in-memory fakes in
//! tests. Repositories take the client as an injected dependency rather than
//! reaching for a process-wide handle.

use std::future::Future;

use crate::{
  id::RecordId,
  record::{
    BatchResponse, CreateParams, DeleteParams, FetchParams, FetchResponse,
    GetResponse, RecordParams, UpdateParams,
  },
};

/// Table-addressed access to the remote record backend.
///
/// An `Err` means the call itself failed (network, malformed response). A
/// backend-level refusal arrives as `Ok` with `success: false`.
pub trait RecordClient: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Query rows of `table` with projection, predicates and ordering.
  fn fetch_records<'a>(
    &'a self,
    table: &'a str,
    params: &'a FetchParams,
  ) -> impl Future<Output = Result<FetchResponse, Self::Error>> + Send + 'a;

  /// Fetch one row by primary key. A missing row is `data: None`.
  fn get_record_by_id<'a>(
    &'a self,
    table: &'a str,
    id: RecordId,
    params: &'a RecordParams,
  ) -> impl Future<Output = Result<GetResponse, Self::Error>> + Send + 'a;

  /// Insert a batch of rows; ids are assigned by the backend.
  fn create_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a CreateParams,
  ) -> impl Future<Output = Result<BatchResponse, Self::Error>> + Send + 'a;

  /// Patch a batch of rows, each addressed by its `Id` column.
  fn update_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a UpdateParams,
  ) -> impl Future<Output = Result<BatchResponse, Self::Error>> + Send + 'a;

  /// Delete a batch of rows by id.
  fn delete_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a DeleteParams,
  ) -> impl Future<Output = Result<BatchResponse, Self::Error>> + Send + 'a;
}
