//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{AskBackend, AskError};

/// A backend that returns a canned outcome and records every question it saw.
pub struct StubBackend {
    outcome: Result<String, AskError>,
    seen: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn answering(answer: &str) -> Self {
        Self {
            outcome: Ok(answer.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AskError) -> Self {
        Self {
            outcome: Err(error),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AskBackend for StubBackend {
    fn endpoint(&self) -> String {
        "stub".to_string()
    }

    async fn ask(&self, question: &str) -> Result<String, AskError> {
        self.seen.lock().unwrap().push(question.to_string());
        self.outcome.clone()
    }
}
