//! `interview-prep` · generate interview questions from the terminal.
//!
//!   interview-prep ask --linkedin-url URL --position P --skills S --experience E [--about A] [--mock]
//!   interview-prep ask --input submission.toml
//!   interview-prep serve-mock [--port 8000]
//!
//! See the library docs for the environment variables.

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

use interview_prep::api::QuestionsApi;
use interview_prep::config::ClientConfig;
use interview_prep::controller::{Controller, ViewState};
use interview_prep::domain::{CandidateDetails, InterviewerDetails, SubmissionInput};
use interview_prep::{devserver, form, render, telemetry};

#[derive(Parser)]
#[command(name = "interview-prep", version, about = "Personalised interview questions from an interviewer's profile")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Submit interviewer/candidate details and print the generated questions.
  Ask(AskArgs),
  /// Run the local development stub of the question service.
  ServeMock {
    #[arg(long, default_value_t = 8000)]
    port: u16,
  },
}

#[derive(Args)]
struct AskArgs {
  /// TOML file with `[interviewer_details]` and `[candidate_details]` tables.
  #[arg(long, conflicts_with_all = ["linkedin_url", "position", "skills", "experience", "about", "mock"])]
  input: Option<PathBuf>,
  #[arg(long)]
  linkedin_url: Option<String>,
  #[arg(long)]
  about: Option<String>,
  /// Ask the service for canned output.
  #[arg(long)]
  mock: bool,
  #[arg(long)]
  position: Option<String>,
  /// Comma-separated.
  #[arg(long)]
  skills: Option<String>,
  #[arg(long)]
  experience: Option<String>,
}

impl AskArgs {
  fn into_input(self) -> Result<SubmissionInput, Box<dyn std::error::Error>> {
    if let Some(path) = self.input {
      let raw = std::fs::read_to_string(&path)?;
      return Ok(toml::from_str::<SubmissionInput>(&raw)?);
    }
    Ok(SubmissionInput {
      interviewer_details: InterviewerDetails {
        linkedin_url: self.linkedin_url.unwrap_or_default(),
        about: self.about.unwrap_or_default(),
        mock: self.mock,
      },
      candidate_details: CandidateDetails {
        position: self.position.unwrap_or_default(),
        skills: self.skills.unwrap_or_default(),
        experience: self.experience.unwrap_or_default(),
      },
    })
  }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
  telemetry::init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Command::ServeMock { port } => {
      devserver::serve(port).await?;
      Ok(ExitCode::SUCCESS)
    }
    Command::Ask(args) => {
      let input = args.into_input()?;
      let cfg = ClientConfig::load();
      info!(target: "interview_prep", endpoint = %cfg.endpoint_url(), timeout_secs = ?cfg.request_timeout_secs, "Client configured");
      let api = QuestionsApi::new(&cfg)?;
      run_ask(&api, input).await
    }
  }
}

/// Drive one lifecycle: validate, submit, render, and offer retries on failure.
#[instrument(level = "info", skip_all)]
async fn run_ask(api: &QuestionsApi, input: SubmissionInput) -> Result<ExitCode, Box<dyn std::error::Error>> {
  if let Err(errors) = form::validate(&input) {
    eprint!("{}", render::render_form_errors(&errors));
    return Ok(ExitCode::from(2));
  }

  let mut controller = Controller::new();
  let mut stdin = BufReader::new(tokio::io::stdin()).lines();
  let mut next = input;

  loop {
    print!("{}", render::render_loading());
    match controller.submit(api, next).await? {
      ViewState::Results => {
        if controller.questions().is_empty() {
          print!("{}", render::render_no_results());
        } else {
          print!("{}", render::render_results(controller.questions()));
        }
        return Ok(ExitCode::SUCCESS);
      }
      ViewState::Error => {
        let Some(err) = controller.error().cloned() else { return Ok(ExitCode::FAILURE) };
        print!("{}", render::render_error(&err, controller.preserved_input()));
        if !err.retry_allowed {
          return Ok(ExitCode::FAILURE);
        }
        let answer = stdin.next_line().await?.unwrap_or_default();
        if !answer.trim().eq_ignore_ascii_case("y") || !controller.retry() {
          return Ok(ExitCode::FAILURE);
        }
        match controller.preserved_input().cloned() {
          Some(preserved) => next = preserved,
          None => return Ok(ExitCode::FAILURE),
        }
      }
      // submit only returns once the call finished
      ViewState::Form | ViewState::Loading => return Ok(ExitCode::FAILURE),
    }
  }
}
