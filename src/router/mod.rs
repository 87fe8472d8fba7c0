//! Routing of classified outputs into named slots.

use crate::agents::AgentSpec;
use crate::classify::ClassifiedOutput;
use serde::Serialize;
use std::collections::BTreeMap;

/// The routed outputs of one run.
///
/// Slots with no classified output are omitted entirely, so callers can
/// distinguish "no output" from "empty output". Presence carries one boolean
/// per declared agent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotOutputs {
    slots: BTreeMap<String, String>,
    presence: BTreeMap<String, bool>,
}

impl SlotOutputs {
    /// Returns the text routed to a slot, if any.
    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Returns the slot-to-text mapping.
    #[must_use]
    pub const fn slots(&self) -> &BTreeMap<String, String> {
        &self.slots
    }

    /// Returns the per-agent presence map.
    #[must_use]
    pub const fn presence(&self) -> &BTreeMap<String, bool> {
        &self.presence
    }

    /// Returns whether a classified output was found for an agent.
    #[must_use]
    pub fn is_present(&self, agent: &str) -> bool {
        self.presence.get(agent).copied().unwrap_or(false)
    }
}

/// Routes classified outputs into their declared slots.
///
/// When two agents declare the same slot, the first declared agent with an
/// output keeps it. Pure function; no side effects.
#[must_use]
pub fn route(outputs: &[ClassifiedOutput], agents: &[AgentSpec]) -> SlotOutputs {
    let mut routed = SlotOutputs::default();

    for agent in agents {
        let output = outputs.iter().find(|o| o.agent == agent.name);
        routed.presence.insert(agent.name.clone(), output.is_some());

        if let Some(output) = output {
            routed
                .slots
                .entry(agent.slot.clone())
                .or_insert_with(|| output.text.clone());
        }
    }

    routed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentSpec;
    use pretty_assertions::assert_eq;

    fn output(agent: &str, text: &str) -> ClassifiedOutput {
        ClassifiedOutput {
            agent: agent.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_route_fills_slots_and_presence() {
        let agents = vec![
            AgentSpec::new("research_agent", "research"),
            AgentSpec::new("linkedin_writer", "linkedin"),
        ];
        let outputs = vec![
            output("research_agent", "TOPIC: yams"),
            output("linkedin_writer", "post #9jaAI_Farmer"),
        ];

        let routed = route(&outputs, &agents);

        assert_eq!(routed.get("research"), Some("TOPIC: yams"));
        assert_eq!(routed.get("linkedin"), Some("post #9jaAI_Farmer"));
        assert!(routed.is_present("research_agent"));
        assert!(routed.is_present("linkedin_writer"));
    }

    #[test]
    fn test_missing_output_omits_slot() {
        let agents = vec![
            AgentSpec::new("research_agent", "research"),
            AgentSpec::new("writer_agent", "summary"),
        ];
        let outputs = vec![output("research_agent", "TOPIC: rice")];

        let routed = route(&outputs, &agents);

        assert_eq!(routed.get("summary"), None);
        assert!(!routed.slots().contains_key("summary"));
        assert_eq!(routed.presence().get("writer_agent"), Some(&false));
    }

    #[test]
    fn test_empty_output_is_distinct_from_absent() {
        let agents = vec![AgentSpec::new("writer_agent", "summary")];
        let outputs = vec![output("writer_agent", "")];

        let routed = route(&outputs, &agents);

        assert_eq!(routed.get("summary"), Some(""));
        assert!(routed.is_present("writer_agent"));
    }

    #[test]
    fn test_shared_slot_first_declared_wins() {
        let agents = vec![
            AgentSpec::new("first", "shared"),
            AgentSpec::new("second", "shared"),
        ];
        let outputs = vec![output("second", "late"), output("first", "early")];

        let routed = route(&outputs, &agents);

        assert_eq!(routed.get("shared"), Some("early"));
    }

    #[test]
    fn test_unknown_agent_presence_defaults_false() {
        let routed = route(&[], &[]);
        assert!(!routed.is_present("nobody"));
    }
}
