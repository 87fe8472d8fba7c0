//! The validated agent pipeline.

use crate::agents::AgentSpec;
use serde::{Deserialize, Serialize};

/// An ordered, validated list of agents.
///
/// Construct through [`super::PipelineBuilder`], which enforces unique
/// names; declaration order is execution order and also classification
/// order for marker matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPipeline {
    name: String,
    agents: Vec<AgentSpec>,
}

impl AgentPipeline {
    pub(super) fn new(name: String, agents: Vec<AgentSpec>) -> Self {
        Self { name, agents }
    }

    /// Returns the pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agents in declared order.
    #[must_use]
    pub fn agents(&self) -> &[AgentSpec] {
        &self.agents
    }

    /// Returns the number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Finds an agent by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&AgentSpec> {
        self.agents.iter().find(|a| a.name == name)
    }
}
