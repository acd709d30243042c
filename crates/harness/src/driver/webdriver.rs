//! WebDriver-backed implementation of the driver traits

use async_trait::async_trait;
use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use tracing::{debug, info};

use crate::error::{HarnessError, HarnessResult};
use crate::locator::Locator;

use super::{PageDriver, PageElement};

/// Configuration for connecting to a WebDriver server.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    /// WebDriver server endpoint (chromedriver, geckodriver, selenium)
    pub server_url: String,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Browser window size
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:9515".to_string(),
            headless: true,
            window_width: 1280,
            window_height: 720,
        }
    }
}

/// One exclusively-owned WebDriver session.
pub struct WebDriverBackend {
    driver: Option<WebDriver>,
}

impl WebDriverBackend {
    /// Connect to the WebDriver server and open a browser window.
    pub async fn connect(config: WebDriverConfig) -> HarnessResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless().map_err(wrap)?;
        }
        caps.add_arg(&format!(
            "--window-size={},{}",
            config.window_width, config.window_height
        ))
        .map_err(wrap)?;

        info!("Connecting to WebDriver at {}", config.server_url);
        let driver = WebDriver::new(&config.server_url, caps)
            .await
            .map_err(wrap)?;

        Ok(Self {
            driver: Some(driver),
        })
    }

    fn driver(&self) -> HarnessResult<&WebDriver> {
        self.driver.as_ref().ok_or(HarnessError::SessionDisposed)
    }
}

fn wrap(err: WebDriverError) -> HarnessError {
    HarnessError::Driver(err.to_string())
}

fn to_by(locator: &Locator) -> By {
    match locator {
        Locator::Css(s) => By::Css(s.clone()),
        Locator::XPath(s) => By::XPath(s.clone()),
        Locator::Id(s) => By::Id(s.clone()),
    }
}

#[async_trait]
impl PageDriver for WebDriverBackend {
    async fn goto(&self, url: &str) -> HarnessResult<()> {
        debug!("navigate to {}", url);
        self.driver()?.goto(url).await.map_err(wrap)
    }

    async fn find(&self, locator: &Locator) -> HarnessResult<Option<Box<dyn PageElement>>> {
        // find_all rather than find: an absent element is an observation
        // for the poll loop, not a driver error.
        let mut matches = self
            .driver()?
            .find_all(to_by(locator))
            .await
            .map_err(wrap)?;

        if matches.is_empty() {
            return Ok(None);
        }
        let element = matches.remove(0);
        Ok(Some(Box::new(WebDriverElement { element })))
    }

    async fn page_source(&self) -> HarnessResult<String> {
        self.driver()?.source().await.map_err(wrap)
    }

    async fn close(&mut self) -> HarnessResult<()> {
        if let Some(driver) = self.driver.take() {
            driver.quit().await.map_err(wrap)?;
        }
        Ok(())
    }
}

struct WebDriverElement {
    element: WebElement,
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn is_visible(&self) -> HarnessResult<bool> {
        self.element.is_displayed().await.map_err(wrap)
    }

    async fn is_enabled(&self) -> HarnessResult<bool> {
        self.element.is_enabled().await.map_err(wrap)
    }

    async fn text(&self) -> HarnessResult<String> {
        self.element.text().await.map_err(wrap)
    }

    async fn click(&self) -> HarnessResult<()> {
        self.element.click().await.map_err(wrap)
    }

    async fn clear(&self) -> HarnessResult<()> {
        self.element.clear().await.map_err(wrap)
    }

    async fn type_text(&self, text: &str) -> HarnessResult<()> {
        self.element.send_keys(text).await.map_err(wrap)
    }

    async fn select_option(&self, value: &str) -> HarnessResult<()> {
        let option = self
            .element
            .find_all(By::XPath(format!(".//option[@value='{}']", value)))
            .await
            .map_err(wrap)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                HarnessError::Driver(format!("option '{}' not present in select", value))
            })?;
        option.click().await.map_err(wrap)
    }
}
