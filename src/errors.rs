//! Error types for the scribeflow pipeline.
//!
//! Configuration and validation problems are detected before a run starts
//! and never leave partial state behind. Backend failures abort the run at
//! the failing agent and are surfaced through the run report rather than as
//! a hard error, so callers decide whether a partial result is usable.

use thiserror::Error;

/// The main error type for scribeflow operations.
#[derive(Debug, Error)]
pub enum ScribeflowError {
    /// A configuration error occurred before any run started.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A pipeline validation error occurred.
    #[error("{0}")]
    Validation(#[from] PipelineValidationError),

    /// A backend call failed during execution.
    #[error("{0}")]
    Backend(#[from] BackendError),
}

/// Errors in static configuration: credentials and agent declarations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A required credential is missing or empty.
    #[error("Missing credential: {name}")]
    MissingCredential {
        /// The credential name (environment variable or field).
        name: String,
    },

    /// An agent declaration is invalid.
    #[error("Invalid agent '{agent}': {reason}")]
    InvalidAgent {
        /// The agent name.
        agent: String,
        /// Why the declaration was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a missing-credential error.
    #[must_use]
    pub fn missing_credential(name: impl Into<String>) -> Self {
        Self::MissingCredential { name: name.into() }
    }

    /// Creates an invalid-agent error.
    #[must_use]
    pub fn invalid_agent(agent: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAgent {
            agent: agent.into(),
            reason: reason.into(),
        }
    }
}

/// Error raised when pipeline validation fails.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PipelineValidationError {
    /// The error message.
    pub message: String,
    /// The agents involved in the error.
    pub agents: Vec<String>,
}

impl PipelineValidationError {
    /// Creates a new pipeline validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            agents: Vec::new(),
        }
    }

    /// Sets the agents involved.
    #[must_use]
    pub fn with_agents(mut self, agents: Vec<String>) -> Self {
        self.agents = agents;
        self
    }
}

/// Error raised when an agent's backend call fails or times out.
#[derive(Debug, Clone, Error)]
#[error("Backend call failed for agent '{agent}': {reason}")]
pub struct BackendError {
    /// The agent whose call failed.
    pub agent: String,
    /// The failure reason.
    pub reason: String,
}

impl BackendError {
    /// Creates a new backend error.
    #[must_use]
    pub fn new(agent: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::missing_credential("GROQ_API_KEY");
        assert_eq!(err.to_string(), "Missing credential: GROQ_API_KEY");
    }

    #[test]
    fn test_invalid_agent_display() {
        let err = ConfigError::invalid_agent("writer", "empty slot");
        assert!(err.to_string().contains("writer"));
        assert!(err.to_string().contains("empty slot"));
    }

    #[test]
    fn test_validation_error_agents() {
        let err = PipelineValidationError::new("Duplicate agent name")
            .with_agents(vec!["research_agent".to_string()]);
        assert_eq!(err.agents.len(), 1);
        assert_eq!(err.to_string(), "Duplicate agent name");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::new("writer_agent", "connection reset");
        assert!(err.to_string().contains("writer_agent"));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_error_conversions() {
        let err: ScribeflowError = BackendError::new("a", "b").into();
        assert!(matches!(err, ScribeflowError::Backend(_)));

        let err: ScribeflowError = PipelineValidationError::new("x").into();
        assert!(matches!(err, ScribeflowError::Validation(_)));
    }
}
