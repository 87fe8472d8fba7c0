//! Event sink trait and implementations.
//!
//! Sinks receive the runner's lifecycle notifications (agent started,
//! completed, failed). They are separate from the [`super::ExecutionEvent`]
//! log a run returns: the log is the run's result, the sink is observability.

use async_trait::async_trait;
use tracing::info;

/// Trait for sinks that receive runner lifecycle events.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Emits an event asynchronously.
    async fn emit(&self, kind: &str, data: serde_json::Value);

    /// Emits an event without blocking. Must never panic; errors are
    /// suppressed.
    fn try_emit(&self, kind: &str, data: serde_json::Value);
}

/// A sink that discards all events. The default when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _kind: &str, _data: serde_json::Value) {}

    fn try_emit(&self, _kind: &str, _data: serde_json::Value) {}
}

/// A sink that logs events through the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventSink;

impl LoggingEventSink {
    /// Creates a new logging sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn log(kind: &str, data: &serde_json::Value) {
        info!(kind = %kind, data = %data, "pipeline event");
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, kind: &str, data: serde_json::Value) {
        Self::log(kind, &data);
    }

    fn try_emit(&self, kind: &str, data: serde_json::Value) {
        Self::log(kind, &data);
    }
}

/// A sink that collects events in memory, for tests.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: parking_lot::RwLock<Vec<(String, serde_json::Value)>>,
}

impl CollectingEventSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<(String, serde_json::Value)> {
        self.events.read().clone()
    }

    /// Returns the collected events of one kind.
    #[must_use]
    pub fn events_of_kind(&self, kind: &str) -> Vec<serde_json::Value> {
        self.events
            .read()
            .iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, d)| d.clone())
            .collect()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, kind: &str, data: serde_json::Value) {
        self.events.write().push((kind.to_string(), data));
    }

    fn try_emit(&self, kind: &str, data: serde_json::Value) {
        self.events.write().push((kind.to_string(), data));
    }
}
