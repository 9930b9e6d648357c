//! Canned questions served by the development stub.
//!
//! Templates use `{position}`, `{skills}`, `{primary_skill}` and
//! `{experience}` placeholders, filled from the submitted candidate details.

use crate::domain::{CandidateDetails, QuestionRecord};
use crate::util::fill_template;

struct SeedQuestion {
  set_type: &'static str,
  category: &'static str,
  difficulty: &'static str,
  question: &'static str,
  why: &'static str,
  depth: &'static str,
  follow_ups: &'static [&'static str],
}

const SEED_QUESTIONS: &[SeedQuestion] = &[
  SeedQuestion {
    set_type: "technical_depth",
    category: "System Design",
    difficulty: "hard",
    question: "Walk me through how you would design the core service behind a {position} role's main product, using {primary_skill}.",
    why: "The interviewer's background leans towards architecture; expect probing on trade-offs rather than syntax.",
    depth: "Cover data model, failure modes and how the design changes at 10x load.",
    follow_ups: &[
      "Where would this design break first?",
      "What would you monitor in production?",
    ],
  },
  SeedQuestion {
    set_type: "technical_depth",
    category: "Fundamentals",
    difficulty: "medium",
    question: "Which part of {skills} do you consider your strongest, and what is a bug you shipped with it?",
    why: "Checks self-awareness about the listed skills and honesty about mistakes.",
    depth: "One concrete incident, root cause and what changed afterwards.",
    follow_ups: &["How did you find the bug?"],
  },
  SeedQuestion {
    set_type: "behavioral",
    category: "Collaboration",
    difficulty: "easy",
    question: "Given your experience ({experience}), tell me about a time you disagreed with a technical decision.",
    why: "Interviewers at this level screen for how candidates handle conflict.",
    depth: "Situation, your position, the outcome, and what you would do differently.",
    follow_ups: &[
      "Who made the final call?",
      "Would you push harder today?",
    ],
  },
];

/// Questions personalised with the candidate's details, in a stable order.
pub fn seed_questions(candidate: &CandidateDetails) -> Vec<QuestionRecord> {
  let primary_skill = candidate
    .skills
    .split(',')
    .map(str::trim)
    .find(|s| !s.is_empty())
    .unwrap_or("your main stack");
  let pairs = [
    ("position", candidate.position.trim()),
    ("skills", candidate.skills.trim()),
    ("primary_skill", primary_skill),
    ("experience", candidate.experience.trim()),
  ];

  SEED_QUESTIONS
    .iter()
    .map(|s| QuestionRecord {
      set_type: s.set_type.into(),
      category: s.category.into(),
      difficulty: s.difficulty.into(),
      question: fill_template(s.question, &pairs),
      why_this_question: s.why.into(),
      expected_depth: s.depth.into(),
      follow_ups: s.follow_ups.iter().map(|f| f.to_string()).collect(),
    })
    .collect()
}
