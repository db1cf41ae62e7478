//! Call record - one completed language-model invocation
//!
//! Records are built once when a call is recorded and never mutated afterwards.
//! The tracker shares a single `Arc<CallRecord>` between every view the call
//! belongs to.

use super::tokens::TokenCounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known call kinds
///
/// The call type is a free-form tag; these are the values the workflow engine
/// emits today.
pub mod call_kind {
    /// Plain generation (default)
    pub const GENERATION: &str = "generation";
    /// Model call made to pick or drive a tool
    pub const TOOL_USE: &str = "tool_use";
    /// Handoff of work to another agent
    pub const DELEGATION: &str = "delegation";
}

/// A single recorded language-model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique call ID
    pub call_id: Uuid,
    /// When the call was recorded
    pub timestamp: DateTime<Utc>,
    /// Agent that issued the call
    pub agent_name: String,
    /// Task the agent was working on
    pub task_name: String,
    /// Model identifier
    pub model: String,
    /// Token usage reported for the call
    pub tokens: TokenCounts,
    /// Why the call was made (see [`call_kind`])
    pub call_type: String,
}

impl CallRecord {
    /// Create a new call record stamped with the current time
    pub fn new(
        agent_name: String,
        task_name: String,
        model: String,
        prompt_tokens: i64,
        completion_tokens: i64,
        call_type: String,
    ) -> Self {
        Self {
            call_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            agent_name,
            task_name,
            model,
            tokens: TokenCounts::new(prompt_tokens, completion_tokens),
            call_type,
        }
    }

    pub fn prompt_tokens(&self) -> i64 {
        self.tokens.prompt_tokens
    }

    pub fn completion_tokens(&self) -> i64 {
        self.tokens.completion_tokens
    }

    pub fn total_tokens(&self) -> i64 {
        self.tokens.total_tokens
    }
}
