//! Runtime configuration for a regression run

use std::path::PathBuf;
use std::time::Duration;

use spendwise_harness::driver::webdriver::WebDriverConfig;
use spendwise_harness::{Credentials, SessionConfig, WaitPolicy};

use crate::locators::SuiteLocators;

/// Knobs for one run against a live deployment.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Application entry point
    pub base_url: String,

    /// WebDriver server endpoint
    pub webdriver_url: String,

    pub username: String,
    pub password: String,

    pub headless: bool,

    /// Per-interaction wait timeout
    pub timeout_ms: u64,

    /// Wait-poll interval
    pub poll_interval_ms: u64,

    /// Settle delay between consecutive dialog dismissals
    pub settle_delay_ms: u64,

    /// Bound on environment setup (reachability + login)
    pub startup_timeout_secs: u64,

    /// Optional YAML file overriding the default locators
    pub locators_file: Option<PathBuf>,

    /// Directory for the JSON run report
    pub output_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            webdriver_url: "http://127.0.0.1:9515".to_string(),
            username: "qa@spendwise.test".to_string(),
            password: "changeme".to_string(),
            headless: true,
            timeout_ms: 10_000,
            poll_interval_ms: 250,
            settle_delay_ms: 400,
            startup_timeout_secs: 30,
            locators_file: None,
            output_dir: PathBuf::from("test-results"),
        }
    }
}

impl SuiteConfig {
    pub fn wait(&self) -> WaitPolicy {
        WaitPolicy::new(self.timeout_ms, self.poll_interval_ms)
    }

    pub fn session_config(&self, locators: &SuiteLocators) -> SessionConfig {
        SessionConfig {
            base_url: self.base_url.clone(),
            login_path: "login".to_string(),
            credentials: Credentials {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            login: locators.login.clone(),
            wait: self.wait(),
            startup_timeout: Duration::from_secs(self.startup_timeout_secs),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            skip_reachability_probe: false,
        }
    }

    pub fn webdriver_config(&self) -> WebDriverConfig {
        WebDriverConfig {
            server_url: self.webdriver_url.clone(),
            headless: self.headless,
            ..WebDriverConfig::default()
        }
    }

    /// Resolve the locator table, applying the override file when set.
    pub fn locators(&self) -> spendwise_harness::HarnessResult<SuiteLocators> {
        match &self.locators_file {
            Some(path) => SuiteLocators::from_file(path),
            None => Ok(SuiteLocators::default()),
        }
    }
}
