//! Event text extraction and agent classification.
//!
//! The backend controls the event payload shape, so extraction probes for
//! capabilities instead of assuming a concrete type: a direct text value
//! first, then a fragment list, then a raw rendering of the whole payload.
//! Attribution prefers the event's explicit author and falls back to
//! content-marker sniffing in declared agent order. Marker matching is a
//! heuristic, so the match order is fixed and tested.

use crate::agents::AgentSpec;
use crate::events::ExecutionEvent;
use serde::Serialize;

/// Extracted text attributed to one agent. Derived per run, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedOutput {
    /// The producing agent's name.
    pub agent: String,
    /// The extracted text.
    pub text: String,
}

/// Extracts plain text from an event.
///
/// Resolution order:
/// 1. a direct text value — returned verbatim;
/// 2. a fragment list — each fragment's text value, or the fragment itself
///    when it is a plain string, joined with newlines; taken only when at
///    least one fragment yields non-empty text;
/// 3. fallback — the payload's compact JSON rendering.
///
/// Total over any payload shape; never panics.
#[must_use]
pub fn extract_text(event: &ExecutionEvent) -> String {
    recognized_text(event).unwrap_or_else(|| event.payload.to_string())
}

/// Extracts text from an event carrying a recognized text shape.
///
/// Covers the direct-text and fragment-list tiers of [`extract_text`] only.
/// Returns `None` for shapes the fallback would render as raw JSON, so
/// callers feeding text to downstream consumers (the shared context commit)
/// can skip events with no recoverable content instead of passing through
/// structural dumps.
#[must_use]
pub fn recognized_text(event: &ExecutionEvent) -> Option<String> {
    if let Some(text) = direct_text(&event.payload) {
        return Some(text.to_string());
    }

    if let Some(fragments) = fragment_list(&event.payload) {
        let collected: Vec<&str> = fragments.iter().filter_map(fragment_text).collect();
        if collected.iter().any(|t| !t.is_empty()) {
            return Some(collected.join("\n"));
        }
    }

    None
}

/// Classifies an event to the agent that produced it.
///
/// An explicit author matching a declared agent wins; otherwise each agent's
/// markers are tested against the extracted text in declared order and the
/// first match wins. Returns `None` for unattributable events.
#[must_use]
pub fn classify<'a>(event: &ExecutionEvent, agents: &'a [AgentSpec]) -> Option<&'a AgentSpec> {
    if let Some(author) = event.author.as_deref() {
        if let Some(agent) = agents.iter().find(|a| a.name == author) {
            return Some(agent);
        }
    }

    let text = extract_text(event);
    agents.iter().find(|agent| agent.matches_text(&text))
}

/// Classifies a full event log: at most one output per declared agent, in
/// declared order, with the last recognized event winning when an agent
/// produced several. Unattributable events are skipped.
#[must_use]
pub fn classify_events(events: &[ExecutionEvent], agents: &[AgentSpec]) -> Vec<ClassifiedOutput> {
    let mut latest: Vec<Option<String>> = vec![None; agents.len()];

    for event in events {
        if let Some(agent) = classify(event, agents) {
            if let Some(index) = agents.iter().position(|a| a.name == agent.name) {
                latest[index] = Some(extract_text(event));
            }
        }
    }

    agents
        .iter()
        .zip(latest)
        .filter_map(|(agent, text)| {
            text.map(|text| ClassifiedOutput {
                agent: agent.name.clone(),
                text,
            })
        })
        .collect()
}

fn direct_text(payload: &serde_json::Value) -> Option<&str> {
    match payload {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Object(map) => map.get("text").and_then(serde_json::Value::as_str),
        _ => None,
    }
}

fn fragment_list(payload: &serde_json::Value) -> Option<&Vec<serde_json::Value>> {
    // Shapes seen from real backends: {"content": {"parts": [..]}},
    // {"parts": [..]}, {"content": [..]}.
    payload["content"]["parts"]
        .as_array()
        .or_else(|| payload["parts"].as_array())
        .or_else(|| payload["content"].as_array())
}

fn fragment_text(fragment: &serde_json::Value) -> Option<&str> {
    match fragment {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Object(map) => map.get("text").and_then(serde_json::Value::as_str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{research_agent, social_campaign_agents};
    use pretty_assertions::assert_eq;

    fn agents() -> Vec<AgentSpec> {
        social_campaign_agents()
    }

    #[test]
    fn test_extract_direct_text_field() {
        let event = ExecutionEvent::text("TOPIC: AI in agriculture");
        assert_eq!(extract_text(&event), "TOPIC: AI in agriculture");
    }

    #[test]
    fn test_extract_string_payload() {
        let event = ExecutionEvent::new(serde_json::json!("plain string payload"));
        assert_eq!(extract_text(&event), "plain string payload");
    }

    #[test]
    fn test_extract_object_fragments() {
        let event = ExecutionEvent::parts(vec![
            serde_json::json!({"text": "line one"}),
            serde_json::json!({"text": "line two"}),
        ]);
        assert_eq!(extract_text(&event), "line one\nline two");
    }

    #[test]
    fn test_extract_mixed_fragments() {
        let event = ExecutionEvent::parts(vec![
            serde_json::json!("a plain string fragment"),
            serde_json::json!({"text": "an object fragment"}),
            serde_json::json!({"function_call": {"name": "search"}}),
        ]);
        assert_eq!(
            extract_text(&event),
            "a plain string fragment\nan object fragment"
        );
    }

    #[test]
    fn test_extract_all_empty_fragments_falls_back() {
        let event = ExecutionEvent::parts(vec![serde_json::json!({"text": ""})]);
        // No fragment yielded non-empty text, so the raw rendering is used.
        let text = extract_text(&event);
        assert!(text.contains("parts"));
    }

    #[test]
    fn test_extract_unrecognized_shape_never_panics() {
        let shapes = [
            serde_json::json!(null),
            serde_json::json!(42),
            serde_json::json!([1, 2, 3]),
            serde_json::json!({"grounding_metadata": {"queries": ["ai"]}}),
        ];
        for payload in shapes {
            let event = ExecutionEvent::new(payload.clone());
            let text = extract_text(&event);
            assert_eq!(text, payload.to_string());
        }
    }

    #[test]
    fn test_recognized_text_covers_text_tiers_only() {
        let direct = ExecutionEvent::text("TOPIC: rice");
        assert_eq!(recognized_text(&direct).as_deref(), Some("TOPIC: rice"));

        let fragments = ExecutionEvent::parts(vec![serde_json::json!({"text": "a point"})]);
        assert_eq!(recognized_text(&fragments).as_deref(), Some("a point"));

        // Shapes only the raw fallback could render yield nothing.
        let tool_call =
            ExecutionEvent::new(serde_json::json!({"tool_call": {"name": "search"}}));
        assert_eq!(recognized_text(&tool_call), None);
        assert_eq!(
            recognized_text(&ExecutionEvent::parts(vec![serde_json::json!({"text": ""})])),
            None
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let event = ExecutionEvent::parts(vec![serde_json::json!({"text": "stable"})]);
        assert_eq!(extract_text(&event), extract_text(&event));
    }

    #[test]
    fn test_classify_prefers_author() {
        // The author says research even though the text carries no marker.
        let event = ExecutionEvent::text("no markers at all").with_author("research_agent");
        let agents = agents();
        let agent = classify(&event, &agents).unwrap();
        assert_eq!(agent.name, "research_agent");
    }

    #[test]
    fn test_classify_unknown_author_falls_back_to_markers() {
        let event =
            ExecutionEvent::text("LINKEDIN: big news #9jaAI_Farmer").with_author("model-7b");
        let agents = agents();
        let agent = classify(&event, &agents).unwrap();
        assert_eq!(agent.name, "linkedin_writer");
    }

    #[test]
    fn test_classify_by_marker_case_insensitive() {
        let event = ExecutionEvent::text("topic: cassava yields");
        let agents = agents();
        let agent = classify(&event, &agents).unwrap();
        assert_eq!(agent.name, "research_agent");
    }

    #[test]
    fn test_classify_declared_order_wins_on_collision() {
        // A text matching both research and linkedin markers goes to the
        // earlier-declared agent.
        let event = ExecutionEvent::text("TOPIC: launch post #9jaAI_Farmer");
        let agents = agents();
        let agent = classify(&event, &agents).unwrap();
        assert_eq!(agent.name, "research_agent");
    }

    #[test]
    fn test_classify_no_match_is_none() {
        let event = ExecutionEvent::new(serde_json::json!({"usage": {"tokens": 12}}));
        assert!(classify(&event, &agents()).is_none());
    }

    #[test]
    fn test_classify_is_deterministic() {
        let event = ExecutionEvent::text("FACEBOOK POST: hello farmers");
        let agents = agents();
        let first = classify(&event, &agents).map(|a| a.name.clone());
        let second = classify(&event, &agents).map(|a| a.name.clone());
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("facebook_writer"));
    }

    #[test]
    fn test_classify_events_last_recognized_wins() {
        let events = vec![
            ExecutionEvent::text("TOPIC: draft one"),
            ExecutionEvent::text("TOPIC: final version"),
        ];
        let outputs = classify_events(&events, &[research_agent()]);

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].text, "TOPIC: final version");
    }

    #[test]
    fn test_classify_events_skips_unattributable() {
        let events = vec![
            ExecutionEvent::text("TOPIC: known"),
            ExecutionEvent::new(serde_json::json!({"usage": {"tokens": 3}})),
        ];
        let outputs = classify_events(&events, &agents());

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].agent, "research_agent");
    }

    #[test]
    fn test_classify_events_preserves_declared_order() {
        let events = vec![
            ExecutionEvent::text("WHATSAPP BROADCAST: short"),
            ExecutionEvent::text("TOPIC: points"),
        ];
        let outputs = classify_events(&events, &agents());

        let names: Vec<_> = outputs.iter().map(|o| o.agent.as_str()).collect();
        assert_eq!(names, vec!["research_agent", "whatsapp_writer"]);
    }
}
