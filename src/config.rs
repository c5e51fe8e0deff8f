//! Helper configuration
//!
//! Injected at construction instead of living in process-wide globals, so two
//! helper instances can run with different timeouts in one process.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the wait/interaction helpers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Timeout applied when a call does not pass its own (milliseconds)
    pub default_timeout_ms: u64,

    /// Cadence at which wait loops re-check their condition (milliseconds)
    pub poll_interval_ms: u64,

    /// Log driver errors swallowed by the visibility check at `warn` level
    pub log_suppressed_errors: bool,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: 30_000,
            poll_interval_ms: 100,
            log_suppressed_errors: false,
        }
    }
}

impl WaitConfig {
    /// Default timeout as a `Duration`
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// Poll interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
