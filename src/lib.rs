//! Convenience wait and interaction helpers for browser-automation drivers
//!
//! Thin, single-purpose wrappers over an [`ElementDriver`]:
//! - Visibility waits: single element, any-of, all-of, hidden
//! - Clickability wait and a wait-then-click composite
//! - Collection count waits and table row counting
//! - Defensive input clearing and last-option selection
//!
//! Timeouts and the polling cadence come from an injected [`WaitConfig`]
//! rather than process-wide globals. The library never installs a `tracing`
//! subscriber; it only emits events.

pub mod config;
pub mod driver;
pub mod errors;
mod helpers;
pub mod types;

pub use config::*;
pub use driver::*;
pub use errors::*;
pub use helpers::*;
pub use types::*;
