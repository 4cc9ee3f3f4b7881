//! HTTP backend over `reqwest`.
//!
//! `POST {base_url}/ask_test` with `{"question": "..."}`, expecting
//! `{"answer": "..."}` back. No timeout and no retries are applied.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::backend::{AskBackend, AskError};

/// Fixed path of the question-answering endpoint, appended to the base URL.
pub const ASK_PATH: &str = "/ask_test";

#[derive(Serialize, Debug)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Deserialize, Debug)]
struct AskResponse {
    answer: String,
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// `base_url` may be empty, meaning "same origin". A terminal has no
    /// origin, so requests then fail as transport errors.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, ASK_PATH)
    }
}

#[async_trait]
impl AskBackend for HttpBackend {
    fn endpoint(&self) -> String {
        self.url()
    }

    async fn ask(&self, question: &str) -> Result<String, AskError> {
        let url = self.url();
        info!("POST {} (question_len={})", url, question.len());

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Ask response status: {}", status);

        if !status.is_success() {
            warn!("Backend returned non-success status {}", status.as_u16());
            return Err(AskError::Http {
                status: status.as_u16(),
            });
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        debug!("Answer received: {} bytes", body.answer.len());
        Ok(body.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_concatenates_base_and_path() {
        let backend = HttpBackend::new("http://localhost:8000");
        assert_eq!(backend.url(), "http://localhost:8000/ask_test");
    }

    #[test]
    fn test_empty_base_is_same_origin_path() {
        let backend = HttpBackend::new("");
        assert_eq!(backend.url(), "/ask_test");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AskRequest { question: "why?" }).unwrap();
        assert_eq!(body, serde_json::json!({"question": "why?"}));
    }

    #[tokio::test]
    async fn test_empty_base_url_is_transport_error() {
        let backend = HttpBackend::new("");
        let result = backend.ask("anything").await;
        assert!(matches!(result, Err(AskError::Transport(_))));
    }
}
