//! Agent declarations.
//!
//! Agents are the participants of a pipeline: each carries an instruction
//! for the model backend, content markers the classifier uses to recognize
//! its output, and the slot that output is routed into.

mod catalog;
mod spec;

pub use catalog::{
    facebook_writer_agent, linkedin_writer_agent, research_agent, research_writer_agents,
    social_campaign_agents, whatsapp_writer_agent, writer_agent, slots,
};
pub use spec::AgentSpec;
