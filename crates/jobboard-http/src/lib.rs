//! [`RecordClient`] over HTTP.
//!
//! Every call is one JSON request against a table-addressed route:
//!
//! | Operation          | Route                                  |
//! |--------------------|----------------------------------------|
//! | `fetch_records`    | `POST   {base}/tables/{table}/fetch`   |
//! | `get_record_by_id` | `POST   {base}/tables/{table}/records/{id}` |
//! | `create_record`    | `POST   {base}/tables/{table}/records` |
//! | `update_record`    | `PUT    {base}/tables/{table}/records` |
//! | `delete_record`    | `DELETE {base}/tables/{table}/records` |
//!
//! Requests carry the project id in `X-Project-Id` and the public key as a
//! bearer token. A non-success status whose body is still a backend envelope
//! (`{"success": false, "message": ...}`) is returned as that envelope, so
//! the record layer sees a refusal rather than a transport error.

pub mod error;

use std::time::Duration;

use jobboard_core::{
  RecordId,
  client::RecordClient,
  record::{
    BatchResponse, CreateParams, DeleteParams, FetchParams, FetchResponse,
    GetResponse, RecordParams, UpdateParams,
  },
};
use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

pub use error::{Error, Result};

const PROJECT_HEADER: &str = "X-Project-Id";

/// Connection settings for the record backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub base_url:   String,
  pub project_id: String,
  pub public_key: String,
  pub timeout:    Duration,
}

impl ClientConfig {
  pub fn new(
    base_url: impl Into<String>,
    project_id: impl Into<String>,
    public_key: impl Into<String>,
  ) -> Self {
    Self {
      base_url:   base_url.into(),
      project_id: project_id.into(),
      public_key: public_key.into(),
      timeout:    Duration::from_secs(30),
    }
  }
}

/// HTTP implementation of [`RecordClient`].
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpClient {
  client: Client,
  config: ClientConfig,
}

impl HttpClient {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::Build)?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &ClientConfig { &self.config }

  fn url(&self, table: &str, rest: &str) -> String {
    format!(
      "{}/tables/{}{}",
      self.config.base_url.trim_end_matches('/'),
      table,
      rest
    )
  }

  async fn send<B, R>(&self, method: Method, url: String, body: &B) -> Result<R>
  where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    debug!(%method, %url, "record backend request");

    let mut req = self
      .client
      .request(method.clone(), &url)
      .json(body);
    if !self.config.project_id.is_empty() {
      req = req.header(PROJECT_HEADER, &self.config.project_id);
    }
    if !self.config.public_key.is_empty() {
      req = req.bearer_auth(&self.config.public_key);
    }

    let resp = req.send().await.map_err(|source| Error::Request {
      method: method.clone(),
      url: url.clone(),
      source,
    })?;
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(|source| Error::Request {
      method: method.clone(),
      url: url.clone(),
      source,
    })?;

    if status.is_success() {
      return serde_json::from_slice(&bytes)
        .map_err(|source| Error::Decode { url, source });
    }

    serde_json::from_slice(&bytes).map_err(|_| Error::Status {
      method,
      url,
      status,
      body: String::from_utf8_lossy(&bytes).into_owned(),
    })
  }
}

impl RecordClient for HttpClient {
  type Error = Error;

  async fn fetch_records<'a>(
    &'a self,
    table: &'a str,
    params: &'a FetchParams,
  ) -> Result<FetchResponse> {
    self.send(Method::POST, self.url(table, "/fetch"), params).await
  }

  async fn get_record_by_id<'a>(
    &'a self,
    table: &'a str,
    id: RecordId,
    params: &'a RecordParams,
  ) -> Result<GetResponse> {
    let url = self.url(table, &format!("/records/{id}"));
    self.send(Method::POST, url, params).await
  }

  async fn create_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a CreateParams,
  ) -> Result<BatchResponse> {
    self.send(Method::POST, self.url(table, "/records"), params).await
  }

  async fn update_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a UpdateParams,
  ) -> Result<BatchResponse> {
    self.send(Method::PUT, self.url(table, "/records"), params).await
  }

  async fn delete_record<'a>(
    &'a self,
    table: &'a str,
    params: &'a DeleteParams,
  ) -> Result<BatchResponse> {
    self.send(Method::DELETE, self.url(table, "/records"), params).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base: &str) -> HttpClient {
    HttpClient::new(ClientConfig::new(base, "proj", "key")).unwrap()
  }

  #[test]
  fn routes_are_table_addressed() {
    let http = client("https://api.example.com/v1/");
    assert_eq!(
      http.url("task_c", "/fetch"),
      "https://api.example.com/v1/tables/task_c/fetch"
    );
    assert_eq!(
      http.url("job_c", "/records/12"),
      "https://api.example.com/v1/tables/job_c/records/12"
    );
  }

  #[test]
  fn default_timeout() {
    assert_eq!(
      ClientConfig::new("http://x", "", "").timeout,
      Duration::from_secs(30)
    );
  }

  #[tokio::test]
  async fn unreachable_backend_is_a_request_error() {
    let http = HttpClient::new(ClientConfig {
      timeout: Duration::from_secs(2),
      ..ClientConfig::new("http://127.0.0.1:9", "", "")
    })
    .unwrap();

    let result = http
      .fetch_records("job_c", &FetchParams::new(&["Name"]))
      .await;
    assert!(matches!(result, Err(Error::Request { .. })));
  }
}
