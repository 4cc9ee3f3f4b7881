//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User types? That's `Action::QuestionChanged(text)`.
//! Backend answers? That's `Action::Settled(Ok(answer))`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, error, warn};

use crate::backend::AskError;
use crate::core::state::{App, Phase};

/// Shown in place of an answer whenever a submission fails, whatever the cause.
pub const APOLOGY: &str = "Sorry, something went wrong while fetching the answer.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input field now holds this text.
    QuestionChanged(String),
    /// The form was submitted.
    Submit,
    /// The outstanding request finished, one way or the other.
    Settled(Result<String, AskError>),
    Quit,
}

/// What the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this question to the backend and feed the result back as `Settled`.
    SpawnRequest(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QuestionChanged(text) => {
            if app.phase == Phase::Submitting {
                debug!("Ignoring input while submitting");
                return Effect::None;
            }
            app.question = text;
            Effect::None
        }
        Action::Submit => {
            if app.question.trim().is_empty() {
                debug!("Submit skipped: question is blank");
                return Effect::None;
            }
            if app.phase == Phase::Submitting {
                warn!("Submit ignored: a request is already in flight");
                return Effect::None;
            }
            app.phase = Phase::Submitting;
            app.response.clear();
            Effect::SpawnRequest(app.question.clone())
        }
        Action::Settled(result) => {
            if app.phase != Phase::Submitting {
                warn!("Dropping settlement with no request in flight");
                return Effect::None;
            }
            match result {
                Ok(answer) => app.response = answer,
                Err(e) => {
                    error!("Failed to fetch answer: {}", e);
                    app.response = APOLOGY.to_string();
                }
            }
            app.phase = Phase::Idle;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
