//! HTTP client for the question-generation service.
//!
//! One POST per call, JSON in and JSON out. Calls are instrumented and log
//! status, latency and response size (not contents). The profile URL is never
//! logged.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{error, info, instrument};

use crate::config::ClientConfig;
use crate::domain::{QuestionRecord, SubmissionInput};
use crate::error::ApiError;
use crate::util::trunc_for_log;

/// Anything that can turn a submission into questions. The controller only
/// sees this trait, so tests can swap the network out.
#[async_trait]
pub trait QuestionService: Send + Sync {
  async fn generate_questions(&self, input: &SubmissionInput) -> Result<Vec<QuestionRecord>, ApiError>;
}

#[derive(Clone)]
pub struct QuestionsApi {
  pub client: reqwest::Client,
  pub endpoint: String,
}

impl QuestionsApi {
  pub fn new(cfg: &ClientConfig) -> Result<Self, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
    if let Some(secs) = cfg.request_timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;
    Ok(Self { client, endpoint: cfg.endpoint_url() })
  }
}

#[async_trait]
impl QuestionService for QuestionsApi {
  #[instrument(
    level = "info",
    target = "api",
    skip(self, input),
    fields(mock = input.interviewer_details.mock, skills_len = input.candidate_details.skills.len())
  )]
  async fn generate_questions(&self, input: &SubmissionInput) -> Result<Vec<QuestionRecord>, ApiError> {
    let start = Instant::now();
    let res = self.client.post(&self.endpoint)
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json")
      .json(input)
      .send().await
      .map_err(|e| {
        error!(target: "api", endpoint = %self.endpoint, elapsed = ?start.elapsed(), error = %e, timeout = e.is_timeout(), "Request failed before a response arrived");
        ApiError::Transport(e.to_string())
      })?;

    let status = res.status();
    let body = res.text().await.map_err(|e| {
      error!(target: "api", endpoint = %self.endpoint, status = status.as_u16(), elapsed = ?start.elapsed(), error = %e, "Response body could not be read");
      ApiError::BodyRead { status: status.as_u16(), error: e.to_string() }
    })?;
    let elapsed = start.elapsed();

    if !status.is_success() {
      error!(target: "api", status = status.as_u16(), ?elapsed, body = %trunc_for_log(&body, 200), "Question service returned an error status");
      return Err(ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        body,
      });
    }

    let questions = serde_json::from_str::<Vec<QuestionRecord>>(&body)
      .map_err(|source| ApiError::Decode { status: status.as_u16(), source })?;
    info!(target: "api", endpoint = %self.endpoint, status = status.as_u16(), ?elapsed, body_len = body.len(), count = questions.len(), "Questions received");
    Ok(questions)
  }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
