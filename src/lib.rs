//! # Scribeflow
//!
//! A sequential multi-agent content pipeline.
//!
//! Scribeflow chains a research agent to one or more writer agents and turns
//! the resulting event log into routed, per-platform text:
//!
//! - **Agent catalogs**: Declarative agent descriptions with identity, role,
//!   and output markers
//! - **Shared context**: A per-run key-value store written by earlier agents
//!   and read by later ones
//! - **Sequential execution**: Agents run in declared order against a
//!   pluggable model backend
//! - **Event classification**: Text extraction and agent attribution over a
//!   heterogeneously shaped event log
//! - **Slot routing**: Classified text mapped to named output slots with
//!   per-agent presence statistics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scribeflow::prelude::*;
//! use std::sync::Arc;
//!
//! let pipeline = PipelineBuilder::new("campaign")
//!     .agents(social_campaign_agents())?
//!     .build()?;
//!
//! let backend: Arc<dyn ModelBackend> = make_backend();
//! let runner = PipelineRunner::new(pipeline, backend);
//!
//! let outcome = runner.run_classified("AI in agriculture").await?;
//! for (slot, text) in outcome.slot_outputs() {
//!     println!("{slot}: {text}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod agents;
pub mod backend;
pub mod classify;
pub mod config;
pub mod context;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod router;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::agents::{
        facebook_writer_agent, linkedin_writer_agent, research_agent,
        research_writer_agents, slots, social_campaign_agents,
        whatsapp_writer_agent, writer_agent, AgentSpec,
    };
    pub use crate::backend::{BackendRequest, ModelBackend};
    pub use crate::classify::{
        classify, classify_events, extract_text, recognized_text, ClassifiedOutput,
    };
    pub use crate::config::BackendCredentials;
    pub use crate::context::{keys, SharedContext};
    pub use crate::errors::{
        BackendError, ConfigError, PipelineValidationError, ScribeflowError,
    };
    pub use crate::events::{
        CollectingEventSink, EventSink, ExecutionEvent, LoggingEventSink,
        NoOpEventSink,
    };
    pub use crate::pipeline::{
        AgentPipeline, PipelineBuilder, PipelineRunner, RunOutcome, RunReport,
    };
    pub use crate::router::{route, SlotOutputs};
    pub use crate::utils::{generate_uuid, iso_timestamp, Timestamp};

    #[cfg(feature = "http-backend")]
    pub use crate::backend::HttpChatBackend;
}
