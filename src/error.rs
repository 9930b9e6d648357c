//! Error taxonomy and classification.
//!
//! `ApiError` is what the HTTP layer produces. `classify` turns it into the
//! `ErrorDetails` the controller stores and the error renderer shows. The wire
//! codes are the contract; messages for known codes are fixed user-facing text.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
  InvalidUrl,
  ValidationError,
  InvalidInput,
  ProfileNotAccessible,
  RateLimited,
  NetworkError,
  ScrapingError,
  GenerationError,
  InternalError,
  UnknownError,
}

impl ErrorCode {
  pub const ALL: [ErrorCode; 10] = [
    ErrorCode::InvalidUrl,
    ErrorCode::ValidationError,
    ErrorCode::InvalidInput,
    ErrorCode::ProfileNotAccessible,
    ErrorCode::RateLimited,
    ErrorCode::NetworkError,
    ErrorCode::ScrapingError,
    ErrorCode::GenerationError,
    ErrorCode::InternalError,
    ErrorCode::UnknownError,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      ErrorCode::InvalidUrl => "INVALID_URL",
      ErrorCode::ValidationError => "VALIDATION_ERROR",
      ErrorCode::InvalidInput => "INVALID_INPUT",
      ErrorCode::ProfileNotAccessible => "PROFILE_NOT_ACCESSIBLE",
      ErrorCode::RateLimited => "RATE_LIMITED",
      ErrorCode::NetworkError => "NETWORK_ERROR",
      ErrorCode::ScrapingError => "SCRAPING_ERROR",
      ErrorCode::GenerationError => "GENERATION_ERROR",
      ErrorCode::InternalError => "INTERNAL_ERROR",
      ErrorCode::UnknownError => "UNKNOWN_ERROR",
    }
  }

  /// Exact match on the wire code; anything else is `None`.
  pub fn from_wire(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.as_str() == code)
  }

  /// Fixed message shown in place of whatever the server said.
  /// `UnknownError` has none: the raw message is the only thing we have.
  pub fn user_message(self) -> Option<&'static str> {
    let msg = match self {
      ErrorCode::InvalidUrl => "The LinkedIn URL was rejected. Please check that it points to a public profile (https://www.linkedin.com/in/...).",
      ErrorCode::ValidationError => "Some of the submitted details failed validation. Please review your entries and try again.",
      ErrorCode::InvalidInput => "Invalid input provided. Please check your entries and try again.",
      ErrorCode::ProfileNotAccessible => "LinkedIn profile not accessible. Please verify the URL and profile privacy settings.",
      ErrorCode::RateLimited => "Temporarily unable to access LinkedIn. Please try again in a few minutes.",
      ErrorCode::NetworkError => "Connection issue detected. Please check your internet connection and retry.",
      ErrorCode::ScrapingError => "Unable to extract profile information. The profile structure may have changed.",
      ErrorCode::GenerationError => "Unable to generate questions. Please try again or contact support if the issue persists.",
      ErrorCode::InternalError => "The server ran into an internal error. Please try again later.",
      ErrorCode::UnknownError => return None,
    };
    Some(msg)
  }

  /// Heading used by the error renderer.
  pub fn title(self) -> &'static str {
    match self {
      ErrorCode::InvalidUrl => "Invalid LinkedIn URL",
      ErrorCode::ProfileNotAccessible => "Profile Not Accessible",
      ErrorCode::RateLimited => "Rate Limit Exceeded",
      ErrorCode::NetworkError => "Connection Error",
      ErrorCode::ValidationError => "Validation Error",
      ErrorCode::GenerationError => "Question Generation Failed",
      ErrorCode::ScrapingError => "Profile Scraping Failed",
      ErrorCode::InternalError => "Internal Server Error",
      ErrorCode::InvalidInput | ErrorCode::UnknownError => "Error Occurred",
    }
  }
}

impl fmt::Display for ErrorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A classified failure, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
  pub code: ErrorCode,
  pub message: String,
  #[serde(default)] pub details: Option<String>,
  #[serde(default = "retry_default")] pub retry_allowed: bool,
}

fn retry_default() -> bool { true }

impl ErrorDetails {
  pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
    Self { code, message: message.into(), details: None, retry_allowed: true }
  }
}

/// Failure of one call to the question service, before classification.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No response was obtained (connect refused, DNS, timeout, ...).
  #[error("transport failure: {0}")]
  Transport(String),

  /// Non-2xx status. `body` is the raw response text (possibly empty).
  #[error("HTTP {status}: {reason}")]
  Status { status: u16, reason: String, body: String },

  /// A status arrived but the body could not be read off the connection.
  #[error("HTTP {status}: response body could not be read: {error}")]
  BodyRead { status: u16, error: String },

  /// 2xx status but the body was not a list of questions.
  #[error("HTTP {status}: response body could not be decoded")]
  Decode {
    status: u16,
    #[source]
    source: serde_json::Error,
  },
}

/// Map a raw failure to exactly one `ErrorDetails`.
pub fn classify(err: &ApiError) -> ErrorDetails {
  let mut out = match err {
    ApiError::Transport(msg) => ErrorDetails {
      code: ErrorCode::NetworkError,
      message: msg.clone(),
      details: Some(msg.clone()),
      retry_allowed: true,
    },

    // The exchange broke mid-response, so this is still a connection problem;
    // `details` keeps the status to show that the server did answer.
    ApiError::BodyRead { .. } => ErrorDetails {
      code: ErrorCode::NetworkError,
      message: err.to_string(),
      details: Some(err.to_string()),
      retry_allowed: true,
    },

    ApiError::Status { status, reason, body } => classify_status(*status, reason, body),

    ApiError::Decode { source, .. } => ErrorDetails {
      code: ErrorCode::UnknownError,
      message: err.to_string(),
      details: Some(source.to_string()),
      retry_allowed: true,
    },
  };

  if let Some(fixed) = out.code.user_message() {
    out.message = fixed.to_string();
  }
  out
}

fn classify_status(status: u16, reason: &str, body: &str) -> ErrorDetails {
  // Status line only when the body is not JSON at all.
  let value = match serde_json::from_str::<Value>(body) {
    Ok(v) => v,
    Err(_) => {
      return ErrorDetails::new(ErrorCode::UnknownError, format!("HTTP {}: {}", status, reason));
    }
  };

  match value.get("detail") {
    Some(Value::String(message)) => ErrorDetails::new(ErrorCode::UnknownError, message.clone()),
    Some(Value::Object(d)) => {
      let code = match d.get("code").and_then(Value::as_str) {
        Some(raw) => ErrorCode::from_wire(raw).unwrap_or_else(|| {
          tracing::warn!(target: "api", code = raw, status, "Unrecognised error code from server");
          ErrorCode::UnknownError
        }),
        None => ErrorCode::UnknownError,
      };
      let message = d.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE);
      ErrorDetails {
        code,
        message: message.to_string(),
        details: d.get("details").and_then(Value::as_str).map(str::to_string),
        retry_allowed: d.get("retry_allowed").and_then(Value::as_bool).unwrap_or(true),
      }
    }
    // Absent, null, arrays (FastAPI's 422 shape) and non-object bodies.
    _ => ErrorDetails::new(ErrorCode::UnknownError, DEFAULT_ERROR_MESSAGE),
  }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
