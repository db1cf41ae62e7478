//! Usage aggregates - per-agent, per-task and whole-workflow views
//!
//! [`WorkflowUsage::apply`] is the single place a call is folded into all three
//! views. It is not synchronized; the tracker calls it under its lock.

use super::call_record::CallRecord;
use super::tokens::TokenCounts;
use crate::TASK_KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Identity of a per-task aggregate
///
/// The same task label can be worked by several agents (delegation), so a task
/// is identified by the (task, agent) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskKey {
    pub task_name: String,
    pub agent_name: String,
}

impl TaskKey {
    pub fn new(task_name: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            agent_name: agent_name.into(),
        }
    }

    /// Create a key from a call record
    pub fn from_call(call: &CallRecord) -> Self {
        Self::new(call.task_name.clone(), call.agent_name.clone())
    }

    /// Render the `"{task}_{agent}"` form used to key the per-task map
    pub fn composite(&self) -> String {
        format!(
            "{}{}{}",
            self.task_name, TASK_KEY_SEPARATOR, self.agent_name
        )
    }
}

/// Running totals for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentUsage {
    /// Agent identifier
    pub agent_name: String,
    /// Cumulative token counts
    pub tokens: TokenCounts,
    /// Number of calls attributed to the agent
    pub call_count: u64,
    /// Every call by this agent, in arrival order
    pub calls: Vec<Arc<CallRecord>>,
}

impl AgentUsage {
    pub fn new(agent_name: String) -> Self {
        Self {
            agent_name,
            tokens: TokenCounts::ZERO,
            call_count: 0,
            calls: Vec::new(),
        }
    }

    /// Fold one call into the totals
    pub fn add_call(&mut self, call: Arc<CallRecord>) {
        self.tokens.add(&call.tokens);
        self.call_count += 1;
        self.calls.push(call);
    }

    pub fn total_tokens(&self) -> i64 {
        self.tokens.total_tokens
    }
}

/// Running totals for one (task, agent) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUsage {
    /// Task identifier
    pub task_name: String,
    /// Agent that worked the task
    pub agent_name: String,
    /// Cumulative token counts
    pub tokens: TokenCounts,
    /// Number of calls attributed to the pair
    pub call_count: u64,
    /// Every call for this pair, in arrival order
    pub calls: Vec<Arc<CallRecord>>,
}

impl TaskUsage {
    pub fn new(key: TaskKey) -> Self {
        Self {
            task_name: key.task_name,
            agent_name: key.agent_name,
            tokens: TokenCounts::ZERO,
            call_count: 0,
            calls: Vec::new(),
        }
    }

    /// Fold one call into the totals
    pub fn add_call(&mut self, call: Arc<CallRecord>) {
        self.tokens.add(&call.tokens);
        self.call_count += 1;
        self.calls.push(call);
    }

    pub fn key(&self) -> TaskKey {
        TaskKey::new(self.task_name.clone(), self.agent_name.clone())
    }

    pub fn total_tokens(&self) -> i64 {
        self.tokens.total_tokens
    }
}

/// Whole-workflow usage: the root aggregate
///
/// Invariant: `tokens` equals the sum over `per_agent`, the sum over
/// `per_task`, and the sum over `all_calls`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowUsage {
    /// Cumulative token counts across the workflow
    pub tokens: TokenCounts,
    /// Per-agent totals keyed by agent name
    pub per_agent: BTreeMap<String, AgentUsage>,
    /// Per-task totals keyed by `"{task}_{agent}"`
    pub per_task: BTreeMap<String, TaskUsage>,
    /// Every recorded call, in arrival order
    pub all_calls: Vec<Arc<CallRecord>>,
}

impl WorkflowUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a call into the workflow, agent and task views
    pub fn apply(&mut self, call: Arc<CallRecord>) {
        self.tokens.add(&call.tokens);
        self.all_calls.push(call.clone());

        self.per_agent
            .entry(call.agent_name.clone())
            .or_insert_with(|| AgentUsage::new(call.agent_name.clone()))
            .add_call(call.clone());

        let key = TaskKey::from_call(&call);
        self.per_task
            .entry(key.composite())
            .or_insert_with(|| TaskUsage::new(key))
            .add_call(call);
    }

    pub fn total_tokens(&self) -> i64 {
        self.tokens.total_tokens
    }

    pub fn prompt_tokens(&self) -> i64 {
        self.tokens.prompt_tokens
    }

    pub fn completion_tokens(&self) -> i64 {
        self.tokens.completion_tokens
    }

    /// Number of calls recorded
    pub fn call_count(&self) -> usize {
        self.all_calls.len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.all_calls.is_empty()
            && self.per_agent.is_empty()
            && self.per_task.is_empty()
            && self.tokens.is_zero()
    }

    /// Look up an agent's totals
    pub fn agent(&self, agent_name: &str) -> Option<&AgentUsage> {
        self.per_agent.get(agent_name)
    }

    /// Look up the totals for a (task, agent) pair
    pub fn task(&self, task_name: &str, agent_name: &str) -> Option<&TaskUsage> {
        self.per_task
            .get(&TaskKey::new(task_name, agent_name).composite())
    }

    /// Token counts grouped by call type
    pub fn tokens_by_call_type(&self) -> BTreeMap<String, TokenCounts> {
        let mut grouped: BTreeMap<String, TokenCounts> = BTreeMap::new();
        for call in &self.all_calls {
            grouped
                .entry(call.call_type.clone())
                .or_default()
                .add(&call.tokens);
        }
        grouped
    }

    /// Token counts grouped by model
    pub fn tokens_by_model(&self) -> BTreeMap<String, TokenCounts> {
        let mut grouped: BTreeMap<String, TokenCounts> = BTreeMap::new();
        for call in &self.all_calls {
            grouped
                .entry(call.model.clone())
                .or_default()
                .add(&call.tokens);
        }
        grouped
    }
}
