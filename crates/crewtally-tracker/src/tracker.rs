//! Usage tracker
//!
//! One mutex guards the whole [`WorkflowUsage`]. Recording a call touches the
//! workflow, agent and task views inside a single critical section, so no
//! reader ever sees one view updated without the others.

use crate::TrackerConfig;
use crewtally_common::{CallRecord, WorkflowUsage};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Thread-safe registry of token usage across agents and tasks
#[derive(Debug)]
pub struct UsageTracker {
    config: TrackerConfig,
    usage: Mutex<WorkflowUsage>,
}

impl UsageTracker {
    /// Create a tracker with default configuration
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Create a tracker with the given configuration
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            usage: Mutex::new(WorkflowUsage::default()),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Record a call using the configured default call type
    pub fn record_call(
        &self,
        agent_name: &str,
        task_name: &str,
        model: &str,
        prompt_tokens: i64,
        completion_tokens: i64,
    ) -> Arc<CallRecord> {
        self.record_call_with_kind(
            agent_name,
            task_name,
            model,
            prompt_tokens,
            completion_tokens,
            &self.config.default_call_type,
        )
    }

    /// Record a call with an explicit call type
    ///
    /// Inputs are not validated. Negative token counts flow into every total.
    pub fn record_call_with_kind(
        &self,
        agent_name: &str,
        task_name: &str,
        model: &str,
        prompt_tokens: i64,
        completion_tokens: i64,
        call_type: &str,
    ) -> Arc<CallRecord> {
        let mut usage = self.usage.lock();

        // Stamped under the lock so timestamps follow arrival order
        let call = Arc::new(CallRecord::new(
            agent_name.to_string(),
            task_name.to_string(),
            model.to_string(),
            prompt_tokens,
            completion_tokens,
            call_type.to_string(),
        ));
        usage.apply(call.clone());
        let workflow_total = usage.total_tokens();
        drop(usage);

        debug!(
            agent = %call.agent_name,
            task = %call.task_name,
            model = %call.model,
            call_type = %call.call_type,
            total_tokens = call.total_tokens(),
            workflow_total,
            "Recorded model call"
        );
        call
    }

    /// Consistent copy of the current usage
    ///
    /// Maps and histories are copied; call records are immutable and shared.
    /// Later recording never changes a snapshot already returned.
    pub fn snapshot(&self) -> WorkflowUsage {
        self.usage.lock().clone()
    }

    /// Current workflow token total
    pub fn total_tokens(&self) -> i64 {
        self.usage.lock().total_tokens()
    }

    /// Discard all usage, returning what was accumulated
    #[instrument(skip(self))]
    pub fn reset(&self) -> WorkflowUsage {
        let previous = std::mem::take(&mut *self.usage.lock());
        info!(
            calls = previous.call_count(),
            total_tokens = previous.total_tokens(),
            agents = previous.per_agent.len(),
            "Reset usage tracker"
        );
        previous
    }
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}
