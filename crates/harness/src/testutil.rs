//! Scripted in-memory page driver for harness tests
//!
//! Nodes are keyed by locator string; tests script visibility, deferred
//! appearance, click side effects, and pending confirmation dialogs, then
//! assert on the recorded action log.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::driver::{PageDriver, PageElement};
use crate::error::HarnessResult;
use crate::locator::Locator;

#[derive(Debug, Clone)]
pub struct Node {
    pub visible: bool,
    pub enabled: bool,
    pub text: String,
    /// Number of find() calls that still observe absence before the node
    /// materializes (simulates slow rendering)
    pub appear_after_finds: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            text: String::new(),
            appear_after_finds: 0,
        }
    }
}

#[derive(Default)]
pub struct PageModel {
    pub nodes: HashMap<String, Node>,
    pub source: String,
    pub visited: Vec<String>,
    pub actions: Vec<String>,
    pub close_count: usize,
    pub dialogs_remaining: usize,
    pub dialog_key: Option<String>,
    /// Clicking the key node makes the value node visible
    pub reveal_on_click: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct ScriptedPage {
    model: Arc<Mutex<PageModel>>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Arc<Mutex<PageModel>> {
        Arc::clone(&self.model)
    }

    fn lock(&self) -> MutexGuard<'_, PageModel> {
        self.model.lock().unwrap()
    }

    pub fn insert(&self, locator: &Locator, node: Node) {
        self.lock().nodes.insert(locator.to_string(), node);
    }

    pub fn set_source(&self, source: impl Into<String>) {
        self.lock().source = source.into();
    }

    pub fn script_dialogs(&self, ok_button: &Locator, count: usize) {
        let mut model = self.lock();
        model.dialog_key = Some(ok_button.to_string());
        model.dialogs_remaining = count;
    }

    pub fn reveal_on_click(&self, clicked: &Locator, revealed: &Locator) {
        self.lock()
            .reveal_on_click
            .insert(clicked.to_string(), revealed.to_string());
    }
}

/// Wait policy short enough for scripted tests.
pub fn fast_policy() -> crate::wait::WaitPolicy {
    crate::wait::WaitPolicy::new(300, 10)
}

/// Session config wired for a scripted page: probe skipped, fast waits,
/// a standard login form.
pub fn scripted_config() -> crate::session::SessionConfig {
    use std::time::Duration;

    crate::session::SessionConfig {
        base_url: "http://spendwise.test".to_string(),
        login_path: "login".to_string(),
        credentials: crate::session::Credentials {
            username: "qa".to_string(),
            password: "pw".to_string(),
        },
        login: crate::session::LoginForm {
            username_input: Locator::id("user"),
            password_input: Locator::id("pass"),
            submit_button: Locator::css("button#login"),
            signed_in_marker: Locator::css("#dash"),
        },
        wait: fast_policy(),
        startup_timeout: Duration::from_millis(300),
        settle_delay: Duration::from_millis(5),
        skip_reachability_probe: true,
    }
}

/// Script the standard login form onto the page: inputs and submit present,
/// marker hidden until the submit button is clicked.
pub fn script_login(page: &ScriptedPage) {
    page.insert(&Locator::id("user"), Node::default());
    page.insert(&Locator::id("pass"), Node::default());
    page.insert(&Locator::css("button#login"), Node::default());
    page.insert(
        &Locator::css("#dash"),
        Node {
            visible: false,
            ..Node::default()
        },
    );
    page.reveal_on_click(&Locator::css("button#login"), &Locator::css("#dash"));
}

#[async_trait]
impl PageDriver for ScriptedPage {
    async fn goto(&self, url: &str) -> HarnessResult<()> {
        self.lock().visited.push(url.to_string());
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> HarnessResult<Option<Box<dyn PageElement>>> {
        let key = locator.to_string();
        let mut model = self.lock();

        if model.dialog_key.as_deref() == Some(key.as_str()) {
            if model.dialogs_remaining > 0 {
                return Ok(Some(Box::new(ScriptedElement {
                    key,
                    model: Arc::clone(&self.model),
                })));
            }
            return Ok(None);
        }

        match model.nodes.get_mut(&key) {
            None => Ok(None),
            Some(node) if node.appear_after_finds > 0 => {
                node.appear_after_finds -= 1;
                Ok(None)
            }
            Some(_) => Ok(Some(Box::new(ScriptedElement {
                key,
                model: Arc::clone(&self.model),
            }))),
        }
    }

    async fn page_source(&self) -> HarnessResult<String> {
        Ok(self.lock().source.clone())
    }

    async fn close(&mut self) -> HarnessResult<()> {
        self.lock().close_count += 1;
        Ok(())
    }
}

struct ScriptedElement {
    key: String,
    model: Arc<Mutex<PageModel>>,
}

impl ScriptedElement {
    fn lock(&self) -> MutexGuard<'_, PageModel> {
        self.model.lock().unwrap()
    }

    fn is_dialog(&self, model: &PageModel) -> bool {
        model.dialog_key.as_deref() == Some(self.key.as_str())
    }
}

#[async_trait]
impl PageElement for ScriptedElement {
    async fn is_visible(&self) -> HarnessResult<bool> {
        let model = self.lock();
        if self.is_dialog(&model) {
            return Ok(model.dialogs_remaining > 0);
        }
        Ok(model.nodes.get(&self.key).map(|n| n.visible).unwrap_or(false))
    }

    async fn is_enabled(&self) -> HarnessResult<bool> {
        let model = self.lock();
        if self.is_dialog(&model) {
            return Ok(true);
        }
        Ok(model.nodes.get(&self.key).map(|n| n.enabled).unwrap_or(false))
    }

    async fn text(&self) -> HarnessResult<String> {
        let model = self.lock();
        Ok(model
            .nodes
            .get(&self.key)
            .map(|n| n.text.clone())
            .unwrap_or_default())
    }

    async fn click(&self) -> HarnessResult<()> {
        let mut model = self.lock();
        model.actions.push(format!("click:{}", self.key));
        if self.is_dialog(&model) && model.dialogs_remaining > 0 {
            model.dialogs_remaining -= 1;
        }
        if let Some(revealed) = model.reveal_on_click.get(&self.key).cloned() {
            if let Some(node) = model.nodes.get_mut(&revealed) {
                node.visible = true;
            }
        }
        Ok(())
    }

    async fn clear(&self) -> HarnessResult<()> {
        self.lock().actions.push(format!("clear:{}", self.key));
        Ok(())
    }

    async fn type_text(&self, text: &str) -> HarnessResult<()> {
        self.lock().actions.push(format!("type:{}:{}", self.key, text));
        Ok(())
    }

    async fn select_option(&self, value: &str) -> HarnessResult<()> {
        self.lock()
            .actions
            .push(format!("select:{}:{}", self.key, value));
        Ok(())
    }
}
