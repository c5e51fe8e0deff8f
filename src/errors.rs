//! Error types for wait and interaction helpers

use thiserror::Error;

/// Failures surfaced by the wait/interaction helpers
#[derive(Debug, Error, Clone)]
pub enum WaitError {
    /// Condition was not satisfied within the timeout bound
    #[error("Wait timeout: {0}")]
    Timeout(String),

    /// Dropdown has no options to select from
    #[error("No options in dropdown: {0}")]
    NoOptions(String),

    /// Driver/transport error from the underlying automation engine
    #[error("Driver I/O error: {0}")]
    Driver(String),
}

impl WaitError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, WaitError::Timeout(_) | WaitError::Driver(_))
    }
}
