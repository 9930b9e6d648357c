//! Handlers for the development stub. Each handler is instrumented and logs
//! basic result info, never the profile URL itself.

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use crate::domain::SubmissionInput;
use crate::form::validate;
use crate::protocol::{ApiErrorResponse, HealthOut};
use crate::seeds::seed_questions;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(body))]
pub async fn http_post_generate_questions(body: Result<Json<SubmissionInput>, JsonRejection>) -> Response {
  let input = match body {
    Ok(Json(input)) => input,
    Err(rejection) => {
      warn!(target: "interview_prep", error = %rejection.body_text(), "Rejected malformed request body");
      let out = ApiErrorResponse::structured("VALIDATION_ERROR", rejection.body_text());
      return (StatusCode::UNPROCESSABLE_ENTITY, Json(out)).into_response();
    }
  };

  if let Err(errors) = validate(&input) {
    let code = if errors.linkedin_url.is_some() { "INVALID_URL" } else { "VALIDATION_ERROR" };
    warn!(target: "interview_prep", %code, %errors, "Rejected invalid submission");
    let out = ApiErrorResponse::structured(code, errors.to_string());
    return (StatusCode::UNPROCESSABLE_ENTITY, Json(out)).into_response();
  }

  let questions = seed_questions(&input.candidate_details);
  info!(target: "interview_prep", count = questions.len(), mock = input.interviewer_details.mock, "Served canned questions");
  Json(questions).into_response()
}
