//! Tracing setup for hosts embedding the tracker

use crate::TrackerConfig;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber
///
/// RUST_LOG wins when set; otherwise the configured filter applies. Returns
/// false if a global subscriber was already installed.
pub fn init_tracing(config: &TrackerConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
