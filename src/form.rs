//! Form-side validation. Runs before the controller ever sees the input;
//! the controller itself trusts what it is given.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::SubmissionInput;

fn linkedin_pattern() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  // Constant pattern; compiles or the build is broken.
  RE.get_or_init(|| Regex::new(r"(?i)^https?://(www\.)?linkedin\.com/in/.+").expect("linkedin pattern"))
}

/// True when `url` looks like a LinkedIn profile URL.
pub fn is_valid_linkedin_url(url: &str) -> bool {
  !url.trim().is_empty() && linkedin_pattern().is_match(url)
}

/// Per-field messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
  pub linkedin_url: Option<String>,
  pub position: Option<String>,
  pub skills: Option<String>,
  pub experience: Option<String>,
}

impl FormErrors {
  pub fn is_empty(&self) -> bool {
    self.iter().next().is_none()
  }

  /// `(field, message)` pairs in form order.
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    [
      ("linkedin_url", &self.linkedin_url),
      ("position", &self.position),
      ("experience", &self.experience),
      ("skills", &self.skills),
    ]
    .into_iter()
    .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
  }
}

impl fmt::Display for FormErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
    f.write_str(&parts.join("; "))
  }
}

impl std::error::Error for FormErrors {}

fn required(value: &str, message: &str) -> Option<String> {
  if value.trim().is_empty() { Some(message.to_string()) } else { None }
}

/// Check required fields and the profile URL shape.
pub fn validate(input: &SubmissionInput) -> Result<(), FormErrors> {
  let url = &input.interviewer_details.linkedin_url;
  let linkedin_url = if url.trim().is_empty() {
    Some("LinkedIn URL is required".to_string())
  } else if !is_valid_linkedin_url(url) {
    Some("Please enter a valid LinkedIn profile URL".to_string())
  } else {
    None
  };

  let c = &input.candidate_details;
  let errors = FormErrors {
    linkedin_url,
    position: required(&c.position, "Position is required"),
    skills: required(&c.skills, "Skills are required"),
    experience: required(&c.experience, "Experience is required"),
  };

  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
