//! Error types for CrewTally
//!
//! Accounting never fails; errors only surface from the configuration layer.

use thiserror::Error;

/// Result type alias using CrewTallyError
pub type Result<T> = std::result::Result<T, CrewTallyError>;

/// Unified error type for CrewTally operations
#[derive(Debug, Error)]
pub enum CrewTallyError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Invalid value for a named setting
    #[error("Invalid value for {key}: {value:?}")]
    InvalidSetting { key: String, value: String },
}

impl CrewTallyError {
    /// Check if this error was caused by bad configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CrewTallyError::Config(_) | CrewTallyError::InvalidSetting { .. }
        )
    }
}
