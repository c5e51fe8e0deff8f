//! Driver port to the underlying automation engine

use async_trait::async_trait;

use crate::errors::WaitError;
use crate::types::{ElementProbe, Key, Locator};

/// Capabilities the helpers require from an automation engine
///
/// Each method is a single round trip against the remote document. Absence of
/// a matching node is reported as [`ElementProbe::Missing`] or a zero count;
/// `Err` is reserved for transport and protocol failures.
#[async_trait]
pub trait ElementDriver: Send + Sync {
    /// Check the current state of the first node matching the locator
    async fn probe(&self, locator: &Locator) -> Result<ElementProbe, WaitError>;

    /// Count the nodes currently matching the locator
    async fn count(&self, locator: &Locator) -> Result<usize, WaitError>;

    /// Dispatch a click on the first node matching the locator
    async fn click(&self, locator: &Locator) -> Result<(), WaitError>;

    /// Simulate key events against the first node matching the locator
    async fn press_keys(&self, locator: &Locator, keys: &[Key]) -> Result<(), WaitError>;
}
