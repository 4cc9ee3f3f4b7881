use std::fmt;

use async_trait::async_trait;
use log::debug;

use crate::core::action::Action;

/// Why a submission failed to produce an answer.
///
/// Both variants end up as the same apology text in the UI; the detail is
/// only kept for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    /// Backend was reached but answered with a non-success status.
    Http { status: u16 },
    /// Request could not be completed, or the body was not the expected JSON.
    Transport(String),
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskError::Http { status } => write!(f, "HTTP error! status: {status}"),
            AskError::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for AskError {}

#[async_trait]
pub trait AskBackend: Send + Sync {
    /// Human-readable target, shown in the title bar.
    fn endpoint(&self) -> String;

    /// Sends one question and waits for the answer text.
    async fn ask(&self, question: &str) -> Result<String, AskError>;
}

/// Runs one request to completion and wraps the outcome as the action that
/// settles the submission. This is the only suspension point of a submit.
pub async fn settle(backend: &dyn AskBackend, question: &str) -> Action {
    let result = backend.ask(question).await;
    debug!("Request settled: ok={}", result.is_ok());
    Action::Settled(result)
}
