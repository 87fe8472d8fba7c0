//! HTTP chat-completions backend.
//!
//! Targets OpenAI-compatible chat endpoints (Groq exposes one; the primary
//! backend is reachable through a compatibility endpoint as well). Each
//! invocation maps to one authored event carrying the returned message
//! content as a fragment list.

use super::{BackendRequest, ModelBackend};
use crate::errors::BackendError;
use crate::events::ExecutionEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// A model backend speaking the OpenAI chat-completions protocol.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl HttpChatBackend {
    /// Creates a backend for an OpenAI-compatible endpoint.
    ///
    /// `base_url` is the API root, e.g. `https://api.groq.com/openai/v1`.
    /// Requests carry the default timeout; use [`Self::with_client`] to
    /// override transport settings.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = Self::default_client().unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Replaces the HTTP client, e.g. to set a custom timeout.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The default request timeout applied by [`Self::default_client`].
    #[must_use]
    pub const fn default_timeout() -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Builds a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if client construction fails.
    pub fn default_client() -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Self::default_timeout())
            .build()
    }
}

#[async_trait]
impl ModelBackend for HttpChatBackend {
    async fn invoke(&self, request: &BackendRequest) -> Result<Vec<ExecutionEvent>, BackendError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.instruction.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt(),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::new(&request.agent, e.to_string()))?
            .error_for_status()
            .map_err(|e| BackendError::new(&request.agent, e.to_string()))?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::new(&request.agent, e.to_string()))?;

        let parts: Vec<serde_json::Value> = parsed
            .choices
            .into_iter()
            .map(|choice| serde_json::json!({ "text": choice.message.content }))
            .collect();

        Ok(vec![ExecutionEvent::authored(
            &request.agent,
            serde_json::json!({ "content": { "parts": parts }, "model": self.model }),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_builds_with_timeout() {
        assert!(HttpChatBackend::default_client().is_ok());
        assert_eq!(HttpChatBackend::default_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_new_constructs() {
        // Construction goes through the timeout-bearing default client.
        let backend = HttpChatBackend::new("https://api.groq.com/openai/v1", "llama3", "key");
        assert_eq!(backend.base_url, "https://api.groq.com/openai/v1");
    }
}
