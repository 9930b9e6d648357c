//! Plain-text presentation of the three views the controller drives:
//! loading placeholder, results list, and error panel.
//!
//! Renderers are pure: they return a `String` and the caller decides where it goes.

use std::fmt::Write;

use crate::domain::{QuestionRecord, SubmissionInput};
use crate::error::ErrorDetails;
use crate::form::FormErrors;
use crate::util::title_case_snake;

pub fn render_loading() -> String {
  "Generating your interview questions...\nThis may take a few moments\n".to_string()
}

/// Shown by the CLI when the service answered with an empty list.
pub fn render_no_results() -> String {
  "No questions were generated. Try adding more detail about the interviewer or role and submit again.\n".to_string()
}

/// Results in the order received. An empty set renders nothing.
pub fn render_results(questions: &[QuestionRecord]) -> String {
  let mut out = String::new();
  if questions.is_empty() {
    return out;
  }

  let n = questions.len();
  let _ = writeln!(out, "Your Interview Questions");
  let _ = writeln!(
    out,
    "{} personalized question{} generated based on the interviewer's profile",
    n,
    if n == 1 { "" } else { "s" }
  );

  for (i, q) in questions.iter().enumerate() {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}. [{}] [{}] [{}]", i + 1, title_case_snake(&q.set_type), q.category, q.difficulty);
    let _ = writeln!(out, "   {}", q.question);
    let _ = writeln!(out, "   Why this question: {}", q.why_this_question);
    let _ = writeln!(out, "   Expected depth: {}", q.expected_depth);
    if !q.follow_ups.is_empty() {
      let _ = writeln!(out, "   Follow-up questions:");
      for (j, f) in q.follow_ups.iter().enumerate() {
        let _ = writeln!(out, "     {}) {}", j + 1, f);
      }
    }
  }
  out
}

/// Error panel: title, message, optional details, the preserved input and
/// (when allowed) the retry hint.
pub fn render_error(error: &ErrorDetails, preserved: Option<&SubmissionInput>) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", error.code.title());
  let _ = writeln!(out, "{}", error.message);
  if let Some(details) = error.details.as_deref().filter(|d| !d.is_empty()) {
    let _ = writeln!(out, "  ({})", details);
  }

  if let Some(input) = preserved {
    let i = &input.interviewer_details;
    let c = &input.candidate_details;
    let rows = [
      ("LinkedIn URL", i.linkedin_url.as_str()),
      ("About", i.about.as_str()),
      ("Position", c.position.as_str()),
      ("Skills", c.skills.as_str()),
      ("Experience", c.experience.as_str()),
    ];
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Input (Preserved for Retry)");
    for (label, value) in rows.iter().filter(|(_, v)| !v.is_empty()) {
      let _ = writeln!(out, "  {:<14}{}", format!("{label}:"), value);
    }
  }

  if error.retry_allowed {
    let _ = writeln!(out);
    let _ = writeln!(out, "Try Again? [y/N]");
  }
  out
}

pub fn render_form_errors(errors: &FormErrors) -> String {
  let mut out = String::new();
  for (field, msg) in errors.iter() {
    let _ = writeln!(out, "{}: {}", field, msg);
  }
  out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
