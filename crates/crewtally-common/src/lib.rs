//! # CrewTally Common
//!
//! Shared usage types and errors for CrewTally token accounting.
//!
//! ## Core Types
//!
//! - [`CallRecord`]: one completed language-model invocation
//! - [`TokenCounts`]: prompt/completion/total triple with derived total
//! - [`AgentUsage`]: running totals for one agent
//! - [`TaskUsage`]: running totals for one (task, agent) pair
//! - [`WorkflowUsage`]: root aggregate holding all three views

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CrewTallyError, Result};
pub use types::{
    call_record::{call_kind, CallRecord},
    tokens::TokenCounts,
    usage::{AgentUsage, TaskKey, TaskUsage, WorkflowUsage},
};

/// CrewTally version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between task and agent in composite task keys
pub const TASK_KEY_SEPARATOR: char = '_';
