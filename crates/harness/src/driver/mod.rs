//! Browser-driver abstraction
//!
//! The harness depends on a small capability set (navigate, locate, read
//! visibility/enabled state and text, dispatch click/type/select), not on a
//! specific automation library. `webdriver::WebDriverBackend` is the shipped
//! implementation; tests substitute scripted in-memory drivers.

pub mod webdriver;

use async_trait::async_trait;

use crate::error::HarnessResult;
use crate::locator::Locator;

/// A located element on the current page.
#[async_trait]
pub trait PageElement: Send + Sync {
    async fn is_visible(&self) -> HarnessResult<bool>;

    async fn is_enabled(&self) -> HarnessResult<bool>;

    /// Rendered text content of the element.
    async fn text(&self) -> HarnessResult<String>;

    async fn click(&self) -> HarnessResult<()>;

    /// Clear any existing value from an input.
    async fn clear(&self) -> HarnessResult<()>;

    /// Type text into the element (does not clear first).
    async fn type_text(&self, text: &str) -> HarnessResult<()>;

    /// Choose the `<option>` whose value attribute matches.
    async fn select_option(&self, value: &str) -> HarnessResult<()>;
}

/// Handle to a live browser page.
///
/// `find` returns `Ok(None)` when the element is currently absent; absence
/// is a normal observation for the wait-poll loop, not an error.
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn goto(&self, url: &str) -> HarnessResult<()>;

    async fn find(&self, locator: &Locator) -> HarnessResult<Option<Box<dyn PageElement>>>;

    /// Full source of the current page, for content assertions.
    async fn page_source(&self) -> HarnessResult<String>;

    /// Release the browser. Must be idempotent.
    async fn close(&mut self) -> HarnessResult<()>;
}
