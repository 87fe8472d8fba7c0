//! Agent specification type.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Declarative description of one pipeline participant.
///
/// Specs are immutable once declared: created at pipeline-configuration
/// time, never mutated during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Unique agent name within a pipeline.
    pub name: String,
    /// Short role description.
    #[serde(default)]
    pub description: String,
    /// Instruction text sent to the model backend.
    #[serde(default)]
    pub instruction: String,
    /// Literal content markers that recognize this agent's output,
    /// matched case-insensitively in declared order.
    #[serde(default)]
    pub markers: Vec<String>,
    /// The output slot this agent's text is routed into.
    pub slot: String,
    /// Shared context key this agent's output is committed under, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writes_key: Option<String>,
}

impl AgentSpec {
    /// Creates a new agent spec routed to a slot.
    #[must_use]
    pub fn new(name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            instruction: String::new(),
            markers: Vec::new(),
            slot: slot.into(),
            writes_key: None,
        }
    }

    /// Sets the role description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the backend instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Adds a content marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Declares the shared context key this agent writes.
    #[must_use]
    pub fn writes_to(mut self, key: impl Into<String>) -> Self {
        self.writes_key = Some(key.into());
        self
    }

    /// Tests whether any of this agent's markers occurs in `text`,
    /// case-insensitively.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        if self.markers.is_empty() {
            return false;
        }
        let haystack = text.to_lowercase();
        self.markers
            .iter()
            .any(|marker| haystack.contains(&marker.to_lowercase()))
    }

    /// Validates the declaration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAgent` if the name or slot is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid_agent(
                &self.name,
                "agent name cannot be empty",
            ));
        }
        if self.slot.trim().is_empty() {
            return Err(ConfigError::invalid_agent(
                &self.name,
                "output slot cannot be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = AgentSpec::new("research_agent", "research")
            .with_description("Researcher that finds information")
            .with_instruction("Search and summarize")
            .with_marker("TOPIC:")
            .writes_to("research_findings");

        assert_eq!(spec.name, "research_agent");
        assert_eq!(spec.slot, "research");
        assert_eq!(spec.markers, vec!["TOPIC:".to_string()]);
        assert_eq!(spec.writes_key.as_deref(), Some("research_findings"));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_marker_match_case_insensitive() {
        let spec = AgentSpec::new("research_agent", "research").with_marker("TOPIC:");

        assert!(spec.matches_text("topic: AI in agriculture"));
        assert!(spec.matches_text("Here it is.\nTOPIC: something"));
        assert!(!spec.matches_text("no marker here"));
    }

    #[test]
    fn test_no_markers_never_matches() {
        let spec = AgentSpec::new("quiet", "slot");
        assert!(!spec.matches_text("anything at all"));
    }

    #[test]
    fn test_validate_empty_name() {
        let spec = AgentSpec::new("  ", "slot");
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_empty_slot() {
        let spec = AgentSpec::new("agent", "");
        assert!(spec.validate().is_err());
    }
}
