//! Execution events and the sink system for run observability.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

use serde::{Deserialize, Serialize};

/// One record of work produced during a pipeline run.
///
/// The payload shape is controlled by the model backend and treated as
/// opaque: it may carry a direct text value, a list of content fragments, or
/// something the classifier has never seen. Events are append-only and never
/// mutated after emission; the full ordered log is returned once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionEvent {
    /// The agent that produced this event, when the backend exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// When the event was emitted (ISO 8601).
    pub timestamp: String,

    /// The backend-shaped payload.
    pub payload: serde_json::Value,
}

impl ExecutionEvent {
    /// Creates an unattributed event from a raw payload.
    #[must_use]
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            author: None,
            timestamp: crate::utils::iso_timestamp(),
            payload,
        }
    }

    /// Creates an event attributed to an agent.
    #[must_use]
    pub fn authored(author: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            author: Some(author.into()),
            timestamp: crate::utils::iso_timestamp(),
            payload,
        }
    }

    /// Creates an unattributed event carrying a direct text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(serde_json::json!({ "text": text.into() }))
    }

    /// Creates an unattributed event carrying a list of content fragments.
    #[must_use]
    pub fn parts(parts: Vec<serde_json::Value>) -> Self {
        Self::new(serde_json::json!({ "content": { "parts": parts } }))
    }

    /// Attributes the event to an agent.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}
