//! Request lifecycle controller for the interview-prep flow.
//!
//! ```text
//!   form --submit--> loading --ok--> results --new_search--> form
//!                       \--err--> error --retry--> form (input preserved)
//! ```
//!
//! Only `form` accepts a submission. Every submit and every `new_search`
//! bumps a generation counter; an outcome whose ticket carries an older
//! generation is discarded instead of being applied.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::api::QuestionService;
use crate::domain::{QuestionRecord, SubmissionInput};
use crate::error::{classify, ApiError, ErrorDetails};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Form,
    Loading,
    Results,
    Error,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewState::Form => "form",
            ViewState::Loading => "loading",
            ViewState::Results => "results",
            ViewState::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("cannot submit while in `{state}` state")]
    NotAcceptingInput { state: ViewState },
}

/// Handle for one in-flight request. Hand it back to `complete`.
#[derive(Debug)]
pub struct PendingRequest {
    generation: u64,
    pub request_id: Uuid,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
    questions: Vec<QuestionRecord>,
    error: Option<ErrorDetails>,
    preserved_input: Option<SubmissionInput>,
    generation: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> ViewState {
        self.state
    }

    /// Last successful result set, in the order the service returned it.
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn error(&self) -> Option<&ErrorDetails> {
        self.error.as_ref()
    }

    pub fn preserved_input(&self) -> Option<&SubmissionInput> {
        self.preserved_input.as_ref()
    }

    /// Move `form -> loading` and hand out a ticket for the request.
    #[instrument(level = "debug", target = "controller", skip(self, input))]
    pub fn begin_submit(&mut self, input: SubmissionInput) -> Result<PendingRequest, ControllerError> {
        let state = self.view_state();
        if state != ViewState::Form {
            warn!(target: "controller", %state, "Submit rejected: not in form state");
            return Err(ControllerError::NotAcceptingInput { state });
        }

        self.generation += 1;
        self.preserved_input = Some(input);
        self.questions.clear();
        self.error = None;
        self.state = ViewState::Loading;

        let ticket = PendingRequest { generation: self.generation, request_id: Uuid::new_v4() };
        info!(target: "controller", request_id = %ticket.request_id, generation = ticket.generation, "Submission started");
        Ok(ticket)
    }

    /// Apply the outcome of a request. Returns `false` when the ticket is stale
    /// (the controller has moved on since it was issued) and nothing changed.
    #[instrument(level = "debug", target = "controller", skip(self, ticket, outcome), fields(request_id = %ticket.request_id))]
    pub fn complete(&mut self, ticket: PendingRequest, outcome: Result<Vec<QuestionRecord>, ApiError>) -> bool {
        if ticket.generation != self.generation || self.view_state() != ViewState::Loading {
            debug!(
                target: "controller",
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                state = %self.view_state(),
                "Discarding stale response"
            );
            return false;
        }

        match outcome {
            Ok(questions) => {
                info!(target: "controller", count = questions.len(), "Submission succeeded");
                self.questions = questions;
                self.state = ViewState::Results;
            }
            Err(e) => {
                let details = classify(&e);
                warn!(target: "controller", code = %details.code, error = %e, "Submission failed");
                self.error = Some(details);
                self.state = ViewState::Error;
            }
        }
        true
    }

    /// Submit, wait for the service, apply the outcome. Returns the state reached.
    pub async fn submit<S>(&mut self, service: &S, input: SubmissionInput) -> Result<ViewState, ControllerError>
    where
        S: QuestionService + ?Sized,
    {
        let body = input.clone();
        let ticket = self.begin_submit(input)?;
        let outcome = service.generate_questions(&body).await;
        self.complete(ticket, outcome);
        Ok(self.view_state())
    }

    /// `error -> form`, keeping the preserved input. Ignored in other states.
    pub fn retry(&mut self) -> bool {
        if self.view_state() != ViewState::Error {
            debug!(target: "controller", state = %self.view_state(), "Retry ignored");
            return false;
        }
        self.error = None;
        self.state = ViewState::Form;
        info!(target: "controller", has_preserved_input = self.preserved_input.is_some(), "Retry: back to form");
        true
    }

    /// Forget everything and go back to an empty form. Any in-flight response
    /// becomes stale.
    pub fn new_search(&mut self) {
        let from = self.view_state();
        self.generation += 1;
        self.questions.clear();
        self.preserved_input = None;
        self.error = None;
        self.state = ViewState::Form;
        info!(target: "controller", %from, "New search");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
