//! Pipeline building and execution.
//!
//! This module provides:
//! - The validated agent pipeline and its builder
//! - The sequential runner
//! - Run reports and the classified run outcome

mod builder;
mod report;
mod runner;
mod spec;

pub use builder::PipelineBuilder;
pub use report::{RunOutcome, RunReport};
pub use runner::PipelineRunner;
pub use spec::AgentPipeline;
