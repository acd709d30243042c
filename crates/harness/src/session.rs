//! Shared browser session fixture
//!
//! One authenticated session is created before any test case runs, handed by
//! reference to every case in the ordered group, and released exactly once
//! after the last case. Setup failure is fatal to the whole run.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::driver::PageDriver;
use crate::error::{HarnessError, HarnessResult};
use crate::locator::Locator;
use crate::step::{self, InteractionStep};
use crate::wait::{self, WaitPolicy};

/// Login credentials for the application under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Locators for the login form. Injectable configuration, like every other
/// locator the harness touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username_input: Locator,
    pub password_input: Locator,
    pub submit_button: Locator,
    /// Element that only exists once authentication succeeded.
    pub signed_in_marker: Locator,
}

/// Configuration for creating a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Application entry point
    pub base_url: String,

    /// Path of the login page, relative to the base URL
    pub login_path: String,

    pub credentials: Credentials,

    pub login: LoginForm,

    /// Wait policy applied to every interaction step
    pub wait: WaitPolicy,

    /// Bound on environment setup: reachability probe and post-login marker
    pub startup_timeout: Duration,

    /// Fixed settle delay between consecutive dialog dismissals
    pub settle_delay: Duration,

    /// Skip the HTTP reachability probe (scripted drivers have no server)
    pub skip_reachability_probe: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            login_path: "login".to_string(),
            credentials: Credentials {
                username: "qa@spendwise.test".to_string(),
                password: "changeme".to_string(),
            },
            login: LoginForm {
                username_input: Locator::id("email"),
                password_input: Locator::id("password"),
                submit_button: Locator::css("button[type='submit']"),
                signed_in_marker: Locator::css("nav .account-menu"),
            },
            wait: WaitPolicy::default(),
            startup_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_millis(400),
            skip_reachability_probe: false,
        }
    }
}

/// One exclusively-owned, authenticated browser session.
pub struct Session {
    driver: Option<Box<dyn PageDriver>>,
    wait: WaitPolicy,
    settle_delay: Duration,
    base_url: String,
}

impl Session {
    /// Perform one-time environment setup: probe the application, open the
    /// login page, submit credentials, and block until the post-login
    /// marker is visible. Any miss within `startup_timeout` aborts the run
    /// with `SetupFailure`; the browser is released before returning.
    pub async fn create(
        driver: Box<dyn PageDriver>,
        config: SessionConfig,
    ) -> HarnessResult<Self> {
        let mut session = Self {
            driver: Some(driver),
            wait: config.wait,
            settle_delay: config.settle_delay,
            base_url: config.base_url.clone(),
        };

        match session.bootstrap(&config).await {
            Ok(()) => {
                info!("session established for {}", config.credentials.username);
                Ok(session)
            }
            Err(err) => {
                let _ = session.dispose().await;
                Err(match err {
                    HarnessError::SetupFailure(_) => err,
                    other => HarnessError::SetupFailure(other.to_string()),
                })
            }
        }
    }

    async fn bootstrap(&mut self, config: &SessionConfig) -> HarnessResult<()> {
        if !config.skip_reachability_probe {
            wait_for_reachable(&config.base_url, config.startup_timeout).await?;
        }

        self.goto(&config.login_path).await?;

        let steps = [
            InteractionStep::type_text(
                "enter login username",
                config.login.username_input.clone(),
                config.credentials.username.as_str(),
            ),
            InteractionStep::type_text(
                "enter login password",
                config.login.password_input.clone(),
                config.credentials.password.as_str(),
            ),
            InteractionStep::click("submit login form", config.login.submit_button.clone()),
        ];
        step::run_steps(self, &steps).await?;

        let marker_policy = self
            .wait
            .with_timeout(config.startup_timeout.as_millis() as u64);
        let marker = wait::visible(self.driver()?, marker_policy, &config.login.signed_in_marker)
            .await?;
        if marker.is_none() {
            return Err(HarnessError::SetupFailure(format!(
                "post-login marker {} not visible within {:?}",
                config.login.signed_in_marker, config.startup_timeout
            )));
        }
        Ok(())
    }

    /// Navigate to a path relative to the base URL (absolute URLs pass
    /// through unchanged).
    pub async fn goto(&self, path: &str) -> HarnessResult<()> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        self.driver()?.goto(&url).await
    }

    /// The underlying driver. `SessionDisposed` once `dispose()` ran.
    pub fn driver(&self) -> HarnessResult<&dyn PageDriver> {
        self.driver.as_deref().ok_or(HarnessError::SessionDisposed)
    }

    pub fn wait(&self) -> WaitPolicy {
        self.wait
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn is_disposed(&self) -> bool {
        self.driver.is_none()
    }

    /// Release the browser resource. Idempotent; safe to call after a
    /// partially failed setup.
    pub async fn dispose(&mut self) -> HarnessResult<()> {
        if let Some(mut driver) = self.driver.take() {
            driver.close().await?;
            info!("browser session released");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("disposed", &self.driver.is_none())
            .field("base_url", &self.base_url)
            .field("settle_delay", &self.settle_delay)
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Closing the driver is async and cannot run here; the runner owns
        // guaranteed teardown. Reaching this with a live driver is a leak.
        if self.driver.is_some() {
            warn!("session dropped without dispose(); browser may be left running");
        }
    }
}

/// Poll the application entry point over HTTP until it answers.
async fn wait_for_reachable(base_url: &str, timeout: Duration) -> HarnessResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = std::time::Instant::now();
    let mut attempts = 0usize;

    while start.elapsed() < timeout {
        attempts += 1;
        match client.get(base_url).send().await {
            Ok(resp) if resp.status().is_success() || resp.status().is_redirection() => {
                return Ok(());
            }
            Ok(resp) => {
                warn!("reachability probe returned {}", resp.status());
            }
            Err(e) => {
                if attempts == 1 {
                    info!("waiting for application at {}...", base_url);
                }
                // Connection refused is expected while the app is starting
                if !e.is_connect() {
                    warn!("reachability probe error: {}", e);
                }
            }
        }
        sleep(Duration::from_millis(250)).await;
    }

    Err(HarnessError::SetupFailure(format!(
        "application at {} unreachable after {} probe attempts",
        base_url, attempts
    )))
}
