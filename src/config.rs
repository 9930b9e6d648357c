//! Client configuration: where the question service lives and how to call it.
//!
//! Resolution order: built-in defaults, then an optional TOML file
//! (`CLIENT_CONFIG_PATH`), then environment overrides. The result is passed
//! to `api::QuestionsApi::new`; nothing downstream reads the environment.
//!
//! Example TOML:
//!
//! ```toml
//! base_url = "https://prep.example.com"
//! endpoint_path = "/api/generate-questions"
//! request_timeout_secs = 60
//! ```

use serde::Deserialize;
use tracing::{error, info, warn};

/// Local development address. Not meant for production use.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/generate-questions";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
  pub base_url: String,
  pub endpoint_path: String,
  /// `None` means no client-side timeout.
  pub request_timeout_secs: Option<u64>,
  pub user_agent: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.into(),
      endpoint_path: DEFAULT_ENDPOINT_PATH.into(),
      request_timeout_secs: None,
      user_agent: concat!("interview-prep/", env!("CARGO_PKG_VERSION")).into(),
    }
  }
}

impl ClientConfig {
  /// Full URL of the generation endpoint.
  pub fn endpoint_url(&self) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path)
  }

  /// Defaults, then TOML file, then env. Never fails; bad sources are logged and skipped.
  pub fn load() -> Self {
    let mut cfg = load_from_file_env().unwrap_or_default();
    cfg.apply_env(|k| std::env::var(k).ok());
    cfg
  }

  /// Apply `INTERVIEW_API_URL` and `INTERVIEW_API_TIMEOUT_SECS` from `lookup`.
  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("INTERVIEW_API_URL").filter(|u| !u.trim().is_empty()) {
      self.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup("INTERVIEW_API_TIMEOUT_SECS") {
      match raw.trim().parse::<u64>() {
        Ok(0) => self.request_timeout_secs = None,
        Ok(secs) => self.request_timeout_secs = Some(secs),
        Err(e) => warn!(target: "interview_prep", value = %raw, error = %e, "Ignoring invalid INTERVIEW_API_TIMEOUT_SECS"),
      }
    }
  }
}

/// Parse a config document. Missing keys fall back to defaults.
pub fn parse_config(s: &str) -> Result<ClientConfig, toml::de::Error> {
  toml::from_str::<ClientConfig>(s)
}

/// Attempt to load `ClientConfig` from CLIENT_CONFIG_PATH. On any parsing/IO error, returns None.
fn load_from_file_env() -> Option<ClientConfig> {
  let path = std::env::var("CLIENT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "interview_prep", %path, "Loaded client config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "interview_prep", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "interview_prep", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
