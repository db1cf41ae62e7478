//! # CrewTally Tracker
//!
//! Thread-safe token usage accounting for multi-agent workflows.
//!
//! Every completed model call is recorded once and reflected atomically in
//! three views: per agent, per (task, agent) pair, and the whole workflow.
//!
//! ```
//! use crewtally_tracker::UsageTracker;
//!
//! let tracker = UsageTracker::new();
//! tracker.record_call("agent_A", "task_1", "gpt", 10, 5);
//! tracker.record_call("agent_B", "task_1", "gpt", 3, 2);
//!
//! let usage = tracker.snapshot();
//! assert_eq!(usage.per_task["task_1_agent_A"].total_tokens(), 15);
//! assert_eq!(usage.per_task["task_1_agent_B"].total_tokens(), 5);
//! assert_eq!(usage.total_tokens(), 20);
//! ```

pub mod config;
pub mod telemetry;
pub mod tracker;

pub use config::TrackerConfig;
pub use crewtally_common::{
    call_kind, AgentUsage, CallRecord, CrewTallyError, Result, TaskKey, TaskUsage, TokenCounts,
    WorkflowUsage,
};
pub use tracker::UsageTracker;

/// Environment variable overriding the default call type
pub const ENV_DEFAULT_CALL_TYPE: &str = "CREWTALLY_DEFAULT_CALL_TYPE";

/// Environment variable holding the fallback log filter
pub const ENV_LOG: &str = "CREWTALLY_LOG";

/// Default log filter when neither RUST_LOG nor CREWTALLY_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info";
