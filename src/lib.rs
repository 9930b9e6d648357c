//! Interview Prep · question-generation client
//!
//! - `controller`: the form → loading → results | error lifecycle
//! - `api`: HTTP client for `POST /api/generate-questions`
//! - `error`: error codes and classification of failed calls
//! - `form` / `render`: input validation and plain-text views
//! - `devserver`: local stub of the remote service for development
//!
//! Important env variables:
//!   INTERVIEW_API_URL          : base URL (default "http://localhost:8000")
//!   INTERVIEW_API_TIMEOUT_SECS : client timeout in seconds (default: none)
//!   CLIENT_CONFIG_PATH         : path to TOML client config
//!   LOG_LEVEL                  : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT                 : "pretty" (default) or "json"

pub mod api;
pub mod config;
pub mod controller;
pub mod devserver;
pub mod domain;
pub mod error;
pub mod form;
pub mod protocol;
pub mod render;
pub mod seeds;
pub mod telemetry;
pub mod util;
