//! Wait and interaction helpers
//!
//! Every wait polls the driver at the configured cadence inside a
//! `tokio::time::timeout`; the timeout error message names the target's
//! locator so failures read well in test logs.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::WaitConfig;
use crate::driver::ElementDriver;
use crate::errors::WaitError;
use crate::types::{ElementHandle, Key};

/// Convenience helpers over an [`ElementDriver`]
///
/// Stateless apart from the injected driver and configuration; helpers are
/// meant to be called sequentially on a handle, not raced against each other.
pub struct ElementWaits {
    driver: Arc<dyn ElementDriver>,
    config: WaitConfig,
}

impl ElementWaits {
    /// Create helpers with an explicit configuration
    pub fn new(driver: Arc<dyn ElementDriver>, config: WaitConfig) -> Self {
        Self { driver, config }
    }

    /// Create helpers with the default configuration (30s timeout, 100ms poll)
    pub fn with_defaults(driver: Arc<dyn ElementDriver>) -> Self {
        Self::new(driver, WaitConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    fn bound(&self, timeout: Option<Duration>) -> Duration {
        timeout.unwrap_or_else(|| self.config.default_timeout())
    }

    /// Wait until the element is visible
    pub async fn wait_until_displayed(
        &self,
        element: &ElementHandle,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!("Waiting for element to be visible: {}", element);

        match tokio::time::timeout(bound, self.poll_all_visible(std::slice::from_ref(element)))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "element {} was not visible after {}ms",
                element,
                bound.as_millis()
            ))),
        }
    }

    /// Wait until at least one of the elements is visible
    pub async fn wait_until_any_displayed(
        &self,
        elements: &[ElementHandle],
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!("Waiting for any of {} elements to be visible", elements.len());

        match tokio::time::timeout(bound, self.poll_any_visible(elements)).await {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "none of [{}] became visible after {}ms",
                describe_all(elements),
                bound.as_millis()
            ))),
        }
    }

    /// Wait until every element is simultaneously visible
    pub async fn wait_until_all_displayed(
        &self,
        elements: &[ElementHandle],
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!("Waiting for all {} elements to be visible", elements.len());

        match tokio::time::timeout(bound, self.poll_all_visible(elements)).await {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "not all of [{}] became visible after {}ms",
                describe_all(elements),
                bound.as_millis()
            ))),
        }
    }

    /// Check visibility without failing
    ///
    /// An absent element and a driver failure both read as "not visible";
    /// the failure is logged when the configuration asks for it.
    pub async fn is_visible(&self, element: &ElementHandle) -> bool {
        match self.driver.probe(element.locator()).await {
            Ok(probe) => probe.is_visible(),
            Err(err) => {
                if self.config.log_suppressed_errors {
                    warn!("visibility probe for {} failed: {}", element, err);
                }
                false
            }
        }
    }

    /// Wait until the element is visible, enabled, and not obscured
    pub async fn wait_until_clickable(
        &self,
        element: &ElementHandle,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!("Waiting for element to be clickable: {}", element);

        match tokio::time::timeout(bound, self.poll_clickable(element)).await {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "element {} was not clickable after {}ms",
                element,
                bound.as_millis()
            ))),
        }
    }

    /// Wait for clickability, then click
    pub async fn click(&self, element: &ElementHandle) -> Result<(), WaitError> {
        self.wait_until_clickable(element, None).await?;
        debug!("Clicking element: {}", element);
        self.driver.click(element.locator()).await
    }

    /// Wait until the element is absent or invisible
    pub async fn wait_until_hidden(
        &self,
        element: &ElementHandle,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!("Waiting for element to be hidden: {}", element);

        match tokio::time::timeout(bound, self.poll_hidden(element)).await {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "element {} was still visible after {}ms",
                element,
                bound.as_millis()
            ))),
        }
    }

    /// Count the rows under the table body; zero when the table is empty
    pub async fn records_count(&self, table: &ElementHandle) -> Result<usize, WaitError> {
        let rows = table.locator().child("tbody").child("tr");
        self.driver.count(&rows).await
    }

    /// Wait until the collection's match count equals `expected`
    pub async fn wait_until_count(
        &self,
        collection: &ElementHandle,
        expected: usize,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let bound = self.bound(timeout);
        debug!(
            "Waiting for {} to match {} elements",
            collection, expected
        );

        match tokio::time::timeout(bound, self.poll_count(collection, expected)).await {
            Ok(result) => result,
            Err(_) => Err(WaitError::Timeout(format!(
                "collection {} did not reach {} matches after {}ms",
                collection,
                expected,
                bound.as_millis()
            ))),
        }
    }

    /// Select the last option of a dropdown by clicking it
    pub async fn select_last_option(&self, dropdown: &ElementHandle) -> Result<(), WaitError> {
        let options = dropdown.locator().child("option");
        let total = self.driver.count(&options).await?;
        if total == 0 {
            return Err(WaitError::NoOptions(format!(
                "dropdown {} has no options",
                dropdown
            )));
        }

        debug!("Selecting option {} of {} in {}", total, total, dropdown);
        self.driver.click(&options.nth(total)).await
    }

    /// Clear a text input's content
    ///
    /// Select-all plus Delete, then select-all plus Backspace. Some inputs
    /// re-fill themselves after a single deletion, hence the second pass.
    pub async fn clear(&self, input: &ElementHandle) -> Result<(), WaitError> {
        debug!("Clearing input: {}", input);
        self.driver
            .press_keys(input.locator(), &[Key::SelectAll, Key::Delete])
            .await?;
        self.driver
            .press_keys(input.locator(), &[Key::SelectAll, Key::Backspace])
            .await
    }

    async fn poll_all_visible(&self, elements: &[ElementHandle]) -> Result<(), WaitError> {
        loop {
            let mut all_visible = true;
            for element in elements {
                if !self.driver.probe(element.locator()).await?.is_visible() {
                    all_visible = false;
                    break;
                }
            }
            if all_visible {
                return Ok(());
            }
            sleep(self.config.poll_interval()).await;
        }
    }

    async fn poll_any_visible(&self, elements: &[ElementHandle]) -> Result<(), WaitError> {
        loop {
            for element in elements {
                if self.driver.probe(element.locator()).await?.is_visible() {
                    return Ok(());
                }
            }
            sleep(self.config.poll_interval()).await;
        }
    }

    async fn poll_clickable(&self, element: &ElementHandle) -> Result<(), WaitError> {
        loop {
            if self.driver.probe(element.locator()).await?.is_clickable() {
                return Ok(());
            }
            sleep(self.config.poll_interval()).await;
        }
    }

    async fn poll_hidden(&self, element: &ElementHandle) -> Result<(), WaitError> {
        loop {
            if self.driver.probe(element.locator()).await?.is_hidden() {
                return Ok(());
            }
            sleep(self.config.poll_interval()).await;
        }
    }

    async fn poll_count(
        &self,
        collection: &ElementHandle,
        expected: usize,
    ) -> Result<(), WaitError> {
        loop {
            if self.driver.count(collection.locator()).await? == expected {
                return Ok(());
            }
            sleep(self.config.poll_interval()).await;
        }
    }
}

fn describe_all(elements: &[ElementHandle]) -> String {
    elements
        .iter()
        .map(|element| element.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
