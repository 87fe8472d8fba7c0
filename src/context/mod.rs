//! Per-run shared context store.
//!
//! The context is the cross-agent communication channel of one pipeline run:
//! earlier agents write under well-known keys, later agents read the whole
//! bag. Each run owns a fresh instance, so concurrent runs can never observe
//! each other's state. Within one run a read before the producing agent has
//! written observes `None`.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Well-known context keys agreed on by agent authors.
pub mod keys {
    /// Findings written by the research agent and read by all writers.
    pub const RESEARCH_FINDINGS: &str = "research_findings";
}

/// A mutable key-value bag shared by the agents of one pipeline run.
///
/// `set` overwrites unconditionally (last-writer-wins); `get` returns `None`
/// for absent keys.
#[derive(Debug, Default)]
pub struct SharedContext {
    data: RwLock<HashMap<String, String>>,
}

impl SharedContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// Sets a value, overwriting any previous value for the key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data.write().insert(key.into(), value.into());
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Returns a copy of all entries.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.data.read().clone()
    }

    /// Returns all keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the context is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Clone for SharedContext {
    fn clone(&self) -> Self {
        Self {
            data: RwLock::new(self.data.read().clone()),
        }
    }
}
