//! Core data types for wait helpers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locator for element targeting
///
/// Describes which document node a handle refers to. The driver resolves the
/// locator lazily on every probe, so a handle created before the node exists
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// CSS selector
    Css(String),

    /// XPath expression
    XPath(String),
}

impl Locator {
    /// Create a CSS locator
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    /// Create an XPath locator
    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    /// Derive a locator for descendants matching `tail`
    pub fn child(&self, tail: &str) -> Locator {
        match self {
            Locator::Css(selector) => Locator::Css(format!("{} {}", selector, tail)),
            Locator::XPath(expr) => Locator::XPath(format!("{}//{}", expr, tail)),
        }
    }

    /// Derive a locator for the nth match (1-based)
    pub fn nth(&self, index: usize) -> Locator {
        match self {
            Locator::Css(selector) => Locator::Css(format!("{}:nth-of-type({})", selector, index)),
            Locator::XPath(expr) => Locator::XPath(format!("({})[{}]", expr, index)),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "css:{}", selector),
            Locator::XPath(expr) => write!(f, "xpath:{}", expr),
        }
    }
}

/// Opaque handle to a node in a remotely-controlled document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    locator: Locator,
}

impl ElementHandle {
    /// Create a handle from a locator
    pub fn new(locator: Locator) -> Self {
        Self { locator }
    }

    /// Create a handle from a CSS selector
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Locator::css(selector))
    }

    /// Create a handle from an XPath expression
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::new(Locator::xpath(expr))
    }

    /// The locator this handle resolves through
    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locator)
    }
}

/// One-shot element state check result
///
/// A missing element is data, not an error: drivers report absence through
/// `Missing` and reserve `Err` for transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementProbe {
    /// No node matched the locator in the live document
    Missing,

    /// A node matched; carries its interactability state
    Present {
        visible: bool,
        enabled: bool,
        obscured: bool,
    },
}

impl ElementProbe {
    /// Element exists and is rendered visible
    pub fn is_visible(&self) -> bool {
        matches!(self, ElementProbe::Present { visible: true, .. })
    }

    /// Element is visible, enabled, and not covered by another node
    pub fn is_clickable(&self) -> bool {
        matches!(
            self,
            ElementProbe::Present {
                visible: true,
                enabled: true,
                obscured: false,
            }
        )
    }

    /// Element is absent or not rendered visible
    pub fn is_hidden(&self) -> bool {
        !self.is_visible()
    }
}

/// Key events the helpers can simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Select-all combination (Ctrl/Cmd+A)
    SelectAll,

    /// Delete key
    Delete,

    /// Backspace key
    Backspace,
}
