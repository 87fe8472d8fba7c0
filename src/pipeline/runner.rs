//! Sequential pipeline runner.

use super::{AgentPipeline, RunOutcome, RunReport};
use crate::backend::{BackendRequest, ModelBackend};
use crate::classify::recognized_text;
use crate::context::SharedContext;
use crate::errors::PipelineValidationError;
use crate::events::{EventSink, ExecutionEvent, NoOpEventSink};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Executes an agent pipeline against a model backend.
///
/// Agents run in declared order, exactly once, strictly sequentially: the
/// next agent starts only after the previous agent's context effects are
/// committed. Each run owns a fresh [`SharedContext`], so concurrent runs
/// never share state.
pub struct PipelineRunner {
    pipeline: AgentPipeline,
    backend: Arc<dyn ModelBackend>,
    sink: Arc<dyn EventSink>,
}

impl PipelineRunner {
    /// Creates a runner for a pipeline and backend.
    #[must_use]
    pub fn new(pipeline: AgentPipeline, backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            pipeline,
            backend,
            sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the lifecycle event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the pipeline.
    #[must_use]
    pub const fn pipeline(&self) -> &AgentPipeline {
        &self.pipeline
    }

    /// Runs the pipeline for a topic and returns the full event log.
    ///
    /// A backend failure does not return `Err`: the report comes back with
    /// `success == false`, the failing agent's name, and the events produced
    /// up to that point, leaving the partial-result decision to the caller.
    ///
    /// # Errors
    ///
    /// Returns `PipelineValidationError` if the topic is empty; nothing has
    /// been executed in that case.
    pub async fn run(&self, topic: &str) -> Result<RunReport, PipelineValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PipelineValidationError::new("Topic cannot be empty"));
        }

        let run_id = crate::utils::generate_uuid();
        let start = Instant::now();
        let context = SharedContext::new();
        let mut events: Vec<ExecutionEvent> = Vec::new();

        debug!(pipeline = %self.pipeline.name(), %run_id, topic, "run started");

        for agent in self.pipeline.agents() {
            self.sink.try_emit(
                "agent.started",
                serde_json::json!({ "agent": agent.name, "run_id": run_id.to_string() }),
            );

            let request = BackendRequest {
                agent: agent.name.clone(),
                instruction: agent.instruction.clone(),
                topic: topic.to_string(),
                context: context.snapshot(),
            };

            let agent_start = Instant::now();
            match self.backend.invoke(&request).await {
                Ok(agent_events) => {
                    // Commit this agent's output to the shared context before
                    // the next agent starts.
                    if let Some(key) = agent.writes_key.as_deref() {
                        let text = combined_text(&agent_events);
                        if !text.is_empty() {
                            context.set(key, text);
                        }
                    }
                    events.extend(agent_events);

                    self.sink.try_emit(
                        "agent.completed",
                        serde_json::json!({
                            "agent": agent.name,
                            "duration_ms": duration_ms(agent_start),
                        }),
                    );
                }
                Err(e) => {
                    warn!(agent = %agent.name, error = %e, "backend call failed, aborting run");
                    self.sink.try_emit(
                        "agent.failed",
                        serde_json::json!({ "agent": agent.name, "error": e.to_string() }),
                    );

                    return Ok(RunReport {
                        run_id,
                        topic: topic.to_string(),
                        events,
                        success: false,
                        error: Some(e.to_string()),
                        failed_agent: Some(agent.name.clone()),
                        duration_ms: duration_ms(start),
                        final_context: context.snapshot(),
                    });
                }
            }
        }

        debug!(%run_id, event_count = events.len(), "run completed");

        Ok(RunReport {
            run_id,
            topic: topic.to_string(),
            events,
            success: true,
            error: None,
            failed_agent: None,
            duration_ms: duration_ms(start),
            final_context: context.snapshot(),
        })
    }

    /// Runs the pipeline and classifies the result in one step.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::run`].
    pub async fn run_classified(&self, topic: &str) -> Result<RunOutcome, PipelineValidationError> {
        let report = self.run(topic).await?;
        Ok(report.classify(self.pipeline.agents().to_vec()))
    }
}

/// Joins the non-empty recognized texts of a batch of events.
///
/// Only the text-carrying tiers count: events with no recoverable content
/// (tool calls, usage metadata) stay in the raw log but never reach the
/// shared context downstream agents consume.
fn combined_text(events: &[ExecutionEvent]) -> String {
    events
        .iter()
        .filter_map(recognized_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn duration_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
