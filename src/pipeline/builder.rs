//! Pipeline builder with validation.

use super::AgentPipeline;
use crate::agents::AgentSpec;
use crate::errors::PipelineValidationError;

/// Builder for creating validated pipelines.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    name: String,
    agents: Vec<AgentSpec>,
}

impl PipelineBuilder {
    /// Creates a new pipeline builder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agents: Vec::new(),
        }
    }

    /// Adds an agent to the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is invalid or the name duplicates an
    /// agent already added.
    pub fn agent(mut self, spec: AgentSpec) -> Result<Self, PipelineValidationError> {
        spec.validate().map_err(|e| {
            PipelineValidationError::new(e.to_string()).with_agents(vec![spec.name.clone()])
        })?;

        if self.agents.iter().any(|a| a.name == spec.name) {
            return Err(PipelineValidationError::new(format!(
                "Duplicate agent name '{}'",
                spec.name
            ))
            .with_agents(vec![spec.name]));
        }

        self.agents.push(spec);
        Ok(self)
    }

    /// Adds a sequence of agents.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn agents(
        mut self,
        specs: impl IntoIterator<Item = AgentSpec>,
    ) -> Result<Self, PipelineValidationError> {
        for spec in specs {
            self = self.agent(spec)?;
        }
        Ok(self)
    }

    /// Builds the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or no agents were added.
    pub fn build(self) -> Result<AgentPipeline, PipelineValidationError> {
        if self.name.trim().is_empty() {
            return Err(PipelineValidationError::new(
                "Pipeline name cannot be empty or whitespace-only",
            ));
        }
        if self.agents.is_empty() {
            return Err(PipelineValidationError::new("Pipeline has no agents"));
        }

        Ok(AgentPipeline::new(self.name, self.agents))
    }

    /// Returns the number of agents added so far.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}
