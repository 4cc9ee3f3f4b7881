//! One-shot mode: a single submission through the same reducer and backend,
//! without the terminal UI. Used by `asker --question`.

use log::info;

use crate::backend::{AskBackend, settle};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

/// Types `question` into a fresh form, submits it and waits for settlement.
///
/// A blank question is skipped, so the returned `App` has an empty response.
pub async fn ask_once(backend: &dyn AskBackend, question: String) -> App {
    let mut app = App::new();
    update(&mut app, Action::QuestionChanged(question));

    if let Effect::SpawnRequest(question) = update(&mut app, Action::Submit) {
        info!("Headless submit to {}", backend.endpoint());
        let settled = settle(backend, &question).await;
        update(&mut app, settled);
    }

    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AskError;
    use crate::core::action::APOLOGY;
    use crate::core::state::Phase;
    use crate::test_support::StubBackend;

    #[tokio::test]
    async fn test_ask_once_returns_answer() {
        let backend = StubBackend::answering("Walter Payton");
        let app = ask_once(&backend, "Who?".to_string()).await;
        assert_eq!(app.response, "Walter Payton");
        assert_eq!(app.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_ask_once_blank_makes_no_call() {
        let backend = StubBackend::answering("unused");
        let app = ask_once(&backend, "   ".to_string()).await;
        assert!(app.response.is_empty());
        assert!(backend.questions().is_empty());
    }

    #[tokio::test]
    async fn test_ask_once_failure_is_apology() {
        let backend = StubBackend::failing(AskError::Transport("refused".to_string()));
        let app = ask_once(&backend, "Who?".to_string()).await;
        assert_eq!(app.response, APOLOGY);
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn test_repeat_submission_is_idempotent() {
        let backend = StubBackend::answering("same");
        let first = ask_once(&backend, "q".to_string()).await;
        let second = ask_once(&backend, "q".to_string()).await;
        assert_eq!(first.response, second.response);
        assert_eq!(backend.questions().len(), 2);
    }
}
