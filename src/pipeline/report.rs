//! Run reports and classified outcomes.

use crate::agents::AgentSpec;
use crate::classify::{classify_events, ClassifiedOutput};
use crate::events::ExecutionEvent;
use crate::router::{route, SlotOutputs};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// The raw result of one pipeline run.
///
/// The event log is ordered by emission time and complete up to the point
/// the run ended; on a backend failure it holds only the events produced
/// before the failing agent, and `failed_agent` names the culprit. Partial
/// context mutations are retained, not rolled back.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Unique ID for this run.
    pub run_id: Uuid,
    /// The topic the run was invoked with.
    pub topic: String,
    /// The ordered execution event log.
    pub events: Vec<ExecutionEvent>,
    /// Whether every agent completed.
    pub success: bool,
    /// Error description if the run aborted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The agent whose backend call failed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_agent: Option<String>,
    /// Total execution time in milliseconds.
    pub duration_ms: f64,
    /// Final shared context contents, for diagnostics.
    pub final_context: HashMap<String, String>,
}

impl RunReport {
    /// Returns the number of events in the log.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Classifies the event log against the given agents, producing the
    /// routed outcome the presentation layer consumes.
    #[must_use]
    pub fn classify(self, agents: Vec<AgentSpec>) -> RunOutcome {
        RunOutcome::new(self, agents)
    }
}

/// A run report together with its classified and routed outputs.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    report: RunReport,
    agents: Vec<AgentSpec>,
    outputs: Vec<ClassifiedOutput>,
    routed: SlotOutputs,
}

impl RunOutcome {
    /// Classifies and routes a report's event log.
    #[must_use]
    pub fn new(report: RunReport, agents: Vec<AgentSpec>) -> Self {
        let outputs = classify_events(&report.events, &agents);
        let routed = route(&outputs, &agents);
        Self {
            report,
            agents,
            outputs,
            routed,
        }
    }

    /// Returns the slot-name-to-text mapping. Slots without output are
    /// omitted.
    #[must_use]
    pub const fn slot_outputs(&self) -> &BTreeMap<String, String> {
        self.routed.slots()
    }

    /// Returns one boolean per declared agent: whether a classified output
    /// was found for it.
    #[must_use]
    pub const fn agent_presence(&self) -> &BTreeMap<String, bool> {
        self.routed.presence()
    }

    /// Returns whether a classified output was found for the named agent.
    #[must_use]
    pub fn is_present(&self, agent: &str) -> bool {
        self.routed.is_present(agent)
    }

    /// Returns the raw event log, for diagnostic display.
    #[must_use]
    pub fn events(&self) -> &[ExecutionEvent] {
        &self.report.events
    }

    /// Returns the classified outputs in declared agent order.
    #[must_use]
    pub fn classified(&self) -> &[ClassifiedOutput] {
        &self.outputs
    }

    /// Returns the underlying report.
    #[must_use]
    pub const fn report(&self) -> &RunReport {
        &self.report
    }

    /// Returns the declared agents.
    #[must_use]
    pub fn agents(&self) -> &[AgentSpec] {
        &self.agents
    }
}
