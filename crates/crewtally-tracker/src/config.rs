//! Tracker configuration

use crate::{DEFAULT_LOG_FILTER, ENV_DEFAULT_CALL_TYPE, ENV_LOG};
use crewtally_common::{call_kind, CrewTallyError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Usage tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Call type applied by `record_call` when the caller gives none
    pub default_call_type: String,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_call_type: call_kind::GENERATION.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the environment (and `.env`, if present)
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(call_type) = lookup(ENV_DEFAULT_CALL_TYPE) {
            let call_type = call_type.trim();
            if call_type.is_empty() {
                return Err(CrewTallyError::InvalidSetting {
                    key: ENV_DEFAULT_CALL_TYPE.to_string(),
                    value: call_type.to_string(),
                });
            }
            cfg.default_call_type = call_type.to_string();
        }

        if let Some(filter) = lookup(ENV_LOG) {
            if EnvFilter::try_new(&filter).is_err() {
                return Err(CrewTallyError::InvalidSetting {
                    key: ENV_LOG.to_string(),
                    value: filter,
                });
            }
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }

    /// Check a hand-built configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_call_type.trim().is_empty() {
            return Err(CrewTallyError::Config(
                "default_call_type must not be empty".into(),
            ));
        }
        if EnvFilter::try_new(&self.log_filter).is_err() {
            return Err(CrewTallyError::Config(format!(
                "log_filter {:?} is not a valid filter directive",
                self.log_filter
            )));
        }
        Ok(())
    }

    /// Set the default call type
    pub fn with_default_call_type(mut self, call_type: impl Into<String>) -> Self {
        self.default_call_type = call_type.into();
        self
    }

    /// Set the fallback log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
