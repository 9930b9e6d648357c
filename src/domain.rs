//! Domain models: what the user submits and what the question service returns.

use serde::{Deserialize, Serialize};

/// Everything the form collects for one generation request.
/// Serialised verbatim as the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionInput {
  pub interviewer_details: InterviewerDetails,
  pub candidate_details: CandidateDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewerDetails {
  pub linkedin_url: String,
  /// Optional free text; sent as "" when left blank.
  #[serde(default)] pub about: String,
  /// Asks the remote service for canned output instead of a real generation.
  #[serde(default)] pub mock: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDetails {
  pub position: String,
  /// Comma-separated, passed through as typed.
  pub skills: String,
  /// Free-form, e.g. "3.6" or "fresher".
  pub experience: String,
}

/// One generated interview question. Immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
  pub set_type: String,
  pub category: String,
  pub difficulty: String,   // free-form (typically easy / medium / hard)
  pub question: String,
  pub why_this_question: String,
  pub expected_depth: String,
  #[serde(default)] pub follow_ups: Vec<String>,
}
