//! Wait-poll protocol
//!
//! Every interaction goes through a poll-until-ready loop that absorbs the
//! rendering latency of an asynchronous page. A wait is a latency tolerance,
//! not a correctness retry: a step either succeeds within its timeout or the
//! calling test case fails.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};

use crate::driver::{PageDriver, PageElement};
use crate::error::HarnessResult;
use crate::locator::Locator;

/// Default wait timeout (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default polling interval (250ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Timeout and poll interval governing one wait loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaitPolicy {
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitPolicy {
    pub fn new(timeout_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            timeout_ms,
            poll_interval_ms,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Repeatedly evaluate `probe` until it yields a value or the policy's
/// timeout elapses.
///
/// The probe is always evaluated at least once, immediately. Success
/// requires an evaluation that starts strictly before the deadline to
/// observe readiness; once the deadline has passed no further evaluation
/// starts and `Ok(None)` is returned. Callers that treat the value as
/// mandatory escalate `None` to an error; callers validating absence
/// accept `None` as a valid terminal state.
pub async fn poll_until<T, F, Fut>(policy: WaitPolicy, mut probe: F) -> HarnessResult<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HarnessResult<Option<T>>>,
{
    let deadline = Instant::now() + policy.timeout();
    loop {
        if let Some(value) = probe().await? {
            return Ok(Some(value));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        sleep(policy.poll_interval()).await;
    }
}

/// Wait until the element exists in the page structure.
pub async fn appeared(
    driver: &dyn PageDriver,
    policy: WaitPolicy,
    locator: &Locator,
) -> HarnessResult<Option<Box<dyn PageElement>>> {
    poll_until(policy, || async move { driver.find(locator).await }).await
}

/// Wait until the element exists and is visible.
pub async fn visible(
    driver: &dyn PageDriver,
    policy: WaitPolicy,
    locator: &Locator,
) -> HarnessResult<Option<Box<dyn PageElement>>> {
    poll_until(policy, || async move {
        let Some(element) = driver.find(locator).await? else {
            return Ok(None);
        };
        if element.is_visible().await? {
            Ok(Some(element))
        } else {
            Ok(None)
        }
    })
    .await
}

/// Wait until the element is visible and enabled, ready for interaction.
pub async fn interactable(
    driver: &dyn PageDriver,
    policy: WaitPolicy,
    locator: &Locator,
) -> HarnessResult<Option<Box<dyn PageElement>>> {
    poll_until(policy, || async move {
        let Some(element) = driver.find(locator).await? else {
            return Ok(None);
        };
        if element.is_visible().await? && element.is_enabled().await? {
            Ok(Some(element))
        } else {
            Ok(None)
        }
    })
    .await
}

/// Wait until the page source contains `needle`. Returns whether it did.
pub async fn page_contains(
    driver: &dyn PageDriver,
    policy: WaitPolicy,
    needle: &str,
) -> HarnessResult<bool> {
    let hit = poll_until(policy, || async move {
        let source = driver.page_source().await?;
        Ok(source.contains(needle).then_some(()))
    })
    .await?;
    Ok(hit.is_some())
}

/// Wait until the page source no longer contains `needle`. Returns whether
/// it disappeared. Absence is the success state here, so a page that never
/// contained the needle succeeds immediately.
pub async fn page_excludes(
    driver: &dyn PageDriver,
    policy: WaitPolicy,
    needle: &str,
) -> HarnessResult<bool> {
    let gone = poll_until(policy, || async move {
        let source = driver.page_source().await?;
        Ok((!source.contains(needle)).then_some(()))
    })
    .await?;
    Ok(gone.is_some())
}
