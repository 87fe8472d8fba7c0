//! Model backend boundary.
//!
//! The executor calls a [`ModelBackend`] once per agent. Implementations own
//! all transport concerns; the executor only sees the resulting
//! [`ExecutionEvent`]s or a [`BackendError`]. The shape of the events is
//! whatever the backend emits — the classifier is written to tolerate it.

#[cfg(feature = "http-backend")]
mod http;

#[cfg(feature = "http-backend")]
pub use http::HttpChatBackend;

use crate::errors::BackendError;
use crate::events::ExecutionEvent;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Write as _;

/// One agent's request to the model backend.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    /// The requesting agent's name.
    pub agent: String,
    /// The agent's instruction text.
    pub instruction: String,
    /// The run topic.
    pub topic: String,
    /// Snapshot of the shared context at call time.
    pub context: HashMap<String, String>,
}

impl BackendRequest {
    /// Renders the user-turn prompt: topic plus the current shared context.
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut prompt = format!("Topic: {}", self.topic);
        if !self.context.is_empty() {
            prompt.push_str("\n\nShared context:");
            // Sorted keys keep the prompt stable across runs.
            let mut keys: Vec<_> = self.context.keys().collect();
            keys.sort();
            for key in keys {
                let _ = write!(prompt, "\n{key}: {}", self.context[key]);
            }
        }
        prompt
    }
}

/// An execution backend able to run one agent's instruction against a model,
/// optionally invoking tools, and return its output as events.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Invokes the model for one agent.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the call fails or times out; the executor
    /// aborts the remainder of the run.
    async fn invoke(&self, request: &BackendRequest) -> Result<Vec<ExecutionEvent>, BackendError>;
}
