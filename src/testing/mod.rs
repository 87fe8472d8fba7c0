//! Test doubles for the model backend boundary.

use crate::backend::{BackendRequest, ModelBackend};
use crate::errors::BackendError;
use crate::events::ExecutionEvent;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A backend that replays scripted events per agent and records requests.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    scripts: Mutex<HashMap<String, Vec<ExecutionEvent>>>,
    fail_agent: Mutex<Option<String>>,
    requests: Mutex<Vec<BackendRequest>>,
    call_count: AtomicUsize,
}

impl ScriptedBackend {
    /// Creates a backend with no scripts; unscripted agents produce no
    /// events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the events returned for an agent.
    #[must_use]
    pub fn script(self, agent: impl Into<String>, events: Vec<ExecutionEvent>) -> Self {
        self.scripts.lock().insert(agent.into(), events);
        self
    }

    /// Scripts a single text event, attributed to the agent.
    #[must_use]
    pub fn script_text(self, agent: impl Into<String>, text: impl Into<String>) -> Self {
        let agent = agent.into();
        let event = ExecutionEvent::text(text.into()).with_author(&agent);
        self.script(agent, vec![event])
    }

    /// Makes the named agent's invocation fail.
    #[must_use]
    pub fn fail_on(self, agent: impl Into<String>) -> Self {
        *self.fail_agent.lock() = Some(agent.into());
        self
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns the recorded requests in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn invoke(&self, request: &BackendRequest) -> Result<Vec<ExecutionEvent>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        if self.fail_agent.lock().as_deref() == Some(request.agent.as_str()) {
            return Err(BackendError::new(&request.agent, "scripted failure"));
        }

        Ok(self
            .scripts
            .lock()
            .get(&request.agent)
            .cloned()
            .unwrap_or_default())
    }
}

/// A backend that echoes the rendered prompt back as an authored text
/// event. Handy for smoke tests that only need attribution.
#[derive(Debug, Default)]
pub struct EchoBackend;

#[async_trait]
impl ModelBackend for EchoBackend {
    async fn invoke(&self, request: &BackendRequest) -> Result<Vec<ExecutionEvent>, BackendError> {
        Ok(vec![
            ExecutionEvent::text(request.prompt()).with_author(&request.agent),
        ])
    }
}
