//! Settings: an optional TOML file overlaid with `JOBBOARD_*` variables.

use std::{path::Path, time::Duration};

use anyhow::{Context as _, Result};
use jobboard_core::RecordId;
use jobboard_http::ClientConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  pub base_url:     String,
  #[serde(default)]
  pub project_id:   String,
  #[serde(default)]
  pub public_key:   String,
  /// Owner of the saved-job and saved-candidate lists.
  #[serde(default = "default_user_id")]
  pub user_id:      u64,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_user_id() -> u64 { 1 }

fn default_timeout_secs() -> u64 { 30 }

impl Settings {
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("JOBBOARD").try_parsing(true))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn user_id(&self) -> Result<RecordId> {
    RecordId::try_from(self.user_id).context("user_id must be a positive integer")
  }

  pub fn client_config(&self) -> ClientConfig {
    ClientConfig {
      timeout: Duration::from_secs(self.timeout_secs),
      ..ClientConfig::new(&self.base_url, &self.project_id, &self.public_key)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply() {
    let settings: Settings = config::Config::builder()
      .set_override("base_url", "https://records.example.com")
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();

    assert_eq!(settings.user_id().unwrap().get(), 1);
    assert_eq!(settings.client_config().timeout, Duration::from_secs(30));
    assert!(settings.project_id.is_empty());
  }

  #[test]
  fn zero_user_is_rejected() {
    let settings = Settings {
      base_url:     "http://x".into(),
      project_id:   String::new(),
      public_key:   String::new(),
      user_id:      0,
      timeout_secs: 5,
    };
    assert!(settings.user_id().is_err());
  }
}
