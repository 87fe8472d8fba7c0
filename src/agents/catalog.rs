//! Statically declared agent catalogs for the shipped pipelines.
//!
//! Two configurations ship: the basic research-to-writer pair, and the
//! social campaign variant that fans the research out to LinkedIn, Facebook
//! and WhatsApp writers. Markers are literal strings each instruction tells
//! the model to include, so the classifier can attribute output even when
//! the backend drops the author field.

use super::AgentSpec;
use crate::context::keys;

/// Output slot names.
pub mod slots {
    /// Research findings panel.
    pub const RESEARCH: &str = "research";
    /// Plain summary panel (basic pipeline).
    pub const SUMMARY: &str = "summary";
    /// LinkedIn platform bucket.
    pub const LINKEDIN: &str = "linkedin";
    /// Facebook platform bucket.
    pub const FACEBOOK: &str = "facebook";
    /// WhatsApp platform bucket.
    pub const WHATSAPP: &str = "whatsapp";
}

/// The research agent shared by both pipelines.
#[must_use]
pub fn research_agent() -> AgentSpec {
    AgentSpec::new("research_agent", slots::RESEARCH)
        .with_description("Researcher that finds information")
        .with_instruction(
            "You are a research agent. When given a topic:\n\
             1. Search for information about it\n\
             2. Find 3 key points\n\
             3. Your findings are stored under 'research_findings' for the writers\n\n\
             Your output format:\n\
             TOPIC: [topic]\n\
             KEY POINTS:\n\
             1. Point 1\n\
             2. Point 2\n\
             3. Point 3",
        )
        .with_marker("TOPIC:")
        .writes_to(keys::RESEARCH_FINDINGS)
}

/// The single writer agent of the basic pipeline.
#[must_use]
pub fn writer_agent() -> AgentSpec {
    AgentSpec::new("writer_agent", slots::SUMMARY)
        .with_description("Writer that creates content from research")
        .with_instruction(
            "You are a writer agent. You will receive research findings under \
             'research_findings'.\n\
             Write: \"Based on research: [summary of what you see in the research]\"\n\
             IMPORTANT: Only use what is in 'research_findings'. Don't make up information.",
        )
        .with_marker("Based on research")
}

/// The LinkedIn writer of the social campaign pipeline.
#[must_use]
pub fn linkedin_writer_agent() -> AgentSpec {
    AgentSpec::new("linkedin_writer", slots::LINKEDIN)
        .with_description("Writer that drafts a LinkedIn post from research")
        .with_instruction(
            "You are a LinkedIn content writer. Using only 'research_findings', \
             write a professional post for farmers and agri-tech readers.\n\
             Start with \"LINKEDIN:\" and close with the campaign tag #9jaAI_Farmer.",
        )
        .with_marker("LINKEDIN:")
        .with_marker("#9jaAI_Farmer")
}

/// The Facebook writer of the social campaign pipeline.
#[must_use]
pub fn facebook_writer_agent() -> AgentSpec {
    AgentSpec::new("facebook_writer", slots::FACEBOOK)
        .with_description("Writer that drafts a Facebook post from research")
        .with_instruction(
            "You are a Facebook content writer. Using only 'research_findings', \
             write a friendly, conversational post.\n\
             Start with \"FACEBOOK POST:\".",
        )
        .with_marker("FACEBOOK POST:")
}

/// The WhatsApp writer of the social campaign pipeline.
#[must_use]
pub fn whatsapp_writer_agent() -> AgentSpec {
    AgentSpec::new("whatsapp_writer", slots::WHATSAPP)
        .with_description("Writer that drafts a WhatsApp broadcast from research")
        .with_instruction(
            "You are a WhatsApp content writer. Using only 'research_findings', \
             write a short broadcast message.\n\
             Start with \"WHATSAPP BROADCAST:\".",
        )
        .with_marker("WHATSAPP BROADCAST:")
}

/// The basic pipeline: research followed by a single writer.
#[must_use]
pub fn research_writer_agents() -> Vec<AgentSpec> {
    vec![research_agent(), writer_agent()]
}

/// The social campaign pipeline: research followed by three platform writers.
#[must_use]
pub fn social_campaign_agents() -> Vec<AgentSpec> {
    vec![
        research_agent(),
        linkedin_writer_agent(),
        facebook_writer_agent(),
        whatsapp_writer_agent(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_catalog_agents_validate() {
        for spec in social_campaign_agents()
            .into_iter()
            .chain(research_writer_agents())
        {
            assert!(spec.validate().is_ok(), "invalid spec: {}", spec.name);
        }
    }

    #[test]
    fn test_campaign_names_and_slots_unique() {
        let agents = social_campaign_agents();
        let names: HashSet<_> = agents.iter().map(|a| a.name.as_str()).collect();
        let slot_names: HashSet<_> = agents.iter().map(|a| a.slot.as_str()).collect();

        assert_eq!(names.len(), agents.len());
        assert_eq!(slot_names.len(), agents.len());
    }

    #[test]
    fn test_markers_disjoint_across_campaign() {
        let agents = social_campaign_agents();
        for (i, a) in agents.iter().enumerate() {
            for b in agents.iter().skip(i + 1) {
                for marker in &a.markers {
                    assert!(
                        !b.matches_text(marker),
                        "marker '{marker}' of {} collides with {}",
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_research_agent_writes_findings() {
        let spec = research_agent();
        assert_eq!(
            spec.writes_key.as_deref(),
            Some(crate::context::keys::RESEARCH_FINDINGS)
        );
    }

    #[test]
    fn test_linkedin_campaign_tag_marker() {
        let spec = linkedin_writer_agent();
        assert!(spec.matches_text("Great harvest season ahead! #9jaAI_Farmer"));
    }
}
