//! Interaction steps and workflow execution
//!
//! A workflow is an ordered list of steps, each pairing a wait condition
//! with one action, followed by zero or more modal confirmations and a
//! post-condition check. Steps are visually identical (wait, then act) but
//! semantically distinct, so every failure names the logical step that
//! failed rather than surfacing a raw driver error.

use std::fmt;
use std::sync::Mutex;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::error::{HarnessError, HarnessResult};
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::{self, poll_until};

/// One action dispatched against a located element.
#[derive(Debug, Clone)]
pub enum StepAction {
    Click,
    /// Clear the input, then type the text.
    TypeText(String),
    /// Choose the option with this value.
    SelectOption(String),
}

/// A wait condition paired with an action. Constructed per invocation and
/// discarded; no persisted state.
#[derive(Debug, Clone)]
pub struct InteractionStep {
    /// Logical step name used in failure messages
    pub name: String,
    pub target: Locator,
    pub action: StepAction,
}

impl InteractionStep {
    pub fn click(name: impl Into<String>, target: Locator) -> Self {
        Self {
            name: name.into(),
            target,
            action: StepAction::Click,
        }
    }

    pub fn type_text(name: impl Into<String>, target: Locator, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            action: StepAction::TypeText(text.into()),
        }
    }

    pub fn select_option(
        name: impl Into<String>,
        target: Locator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            action: StepAction::SelectOption(value.into()),
        }
    }
}

/// Observable state required for a workflow to terminate in `Verified`.
#[derive(Debug, Clone)]
pub enum PostCondition {
    ElementTextEquals { target: Locator, expected: String },
    ElementTextContains { target: Locator, expected: String },
    PageContains(String),
    PageExcludes(String),
}

impl fmt::Display for PostCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementTextEquals { target, expected } => {
                write!(f, "text of {} equals '{}'", target, expected)
            }
            Self::ElementTextContains { target, expected } => {
                write!(f, "text of {} contains '{}'", target, expected)
            }
            Self::PageContains(needle) => write!(f, "page contains '{}'", needle),
            Self::PageExcludes(needle) => write!(f, "page no longer contains '{}'", needle),
        }
    }
}

/// One navigate → steps → confirmations → post-condition execution.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub name: String,
    /// Page to open first, relative to the session base URL
    pub page: Option<String>,
    pub steps: Vec<InteractionStep>,
    /// Number of confirmation dialogs expected after the final step
    pub confirmations: usize,
    /// Locator of the dialog OK button. One fixed locator serves every
    /// workflow's dialogs; an application rendering dialogs at varying
    /// positions would defeat this (known limitation, kept from the
    /// original behavior).
    pub dialog_ok: Option<Locator>,
    pub postcondition: Option<PostCondition>,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: None,
            steps: Vec::new(),
            confirmations: 0,
            dialog_ok: None,
            postcondition: None,
        }
    }

    pub fn on_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn step(mut self, step: InteractionStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn confirmations(mut self, count: usize, ok_button: Locator) -> Self {
        self.confirmations = count;
        self.dialog_ok = Some(ok_button);
        self
    }

    pub fn expect(mut self, condition: PostCondition) -> Self {
        self.postcondition = Some(condition);
        self
    }
}

/// Run the steps in order. Each step waits until its element is visible and
/// enabled, then performs its action; an element that never becomes ready
/// fails the step with `ElementNotFound` naming it.
pub async fn run_steps(session: &Session, steps: &[InteractionStep]) -> HarnessResult<()> {
    for step in steps {
        debug!(step = %step.name, target = %step.target, "executing step");
        let driver = session.driver()?;
        let element = wait::interactable(driver, session.wait(), &step.target)
            .await?
            .ok_or_else(|| HarnessError::ElementNotFound {
                step: step.name.clone(),
                locator: step.target.to_string(),
            })?;

        match &step.action {
            StepAction::Click => element.click().await?,
            StepAction::TypeText(text) => {
                element.clear().await?;
                element.type_text(text).await?;
            }
            StepAction::SelectOption(value) => element.select_option(value).await?,
        }
    }
    Ok(())
}

/// Sequentially wait for and dismiss exactly `count` confirmation dialogs,
/// with the session's settle delay between dismissals so the next dialog
/// can render. `count = 0` is a no-op. A dialog that never appears raises
/// `InteractionTimeout` naming its 1-based index.
pub async fn confirm_dialogs(
    session: &Session,
    ok_button: &Locator,
    count: usize,
) -> HarnessResult<()> {
    for index in 1..=count {
        let driver = session.driver()?;
        let button = wait::interactable(driver, session.wait(), ok_button)
            .await?
            .ok_or_else(|| {
                HarnessError::InteractionTimeout(format!(
                    "confirmation dialog {} of {} did not appear",
                    index, count
                ))
            })?;
        button.click().await?;
        debug!("dismissed confirmation dialog {} of {}", index, count);
        if index < count {
            sleep(session.settle_delay()).await;
        }
    }
    Ok(())
}

/// Poll until the post-condition holds; `AssertionFailed` otherwise.
pub async fn verify(session: &Session, condition: &PostCondition) -> HarnessResult<()> {
    let driver = session.driver()?;
    let policy = session.wait();

    match condition {
        PostCondition::ElementTextEquals { target, expected }
        | PostCondition::ElementTextContains { target, expected } => {
            let exact = matches!(condition, PostCondition::ElementTextEquals { .. });
            let last_seen: Mutex<Option<String>> = Mutex::new(None);
            let last_seen = &last_seen;
            let hit = poll_until(policy, || async move {
                let Some(element) = driver.find(target).await? else {
                    return Ok(None);
                };
                if !element.is_visible().await? {
                    return Ok(None);
                }
                let text = element.text().await?;
                let matched = if exact {
                    text == *expected
                } else {
                    text.contains(expected.as_str())
                };
                *last_seen.lock().unwrap() = Some(text);
                Ok(matched.then_some(()))
            })
            .await?;

            if hit.is_none() {
                let seen = last_seen.lock().unwrap().take();
                return Err(HarnessError::AssertionFailed(match seen {
                    Some(text) => format!("{}; last observed text was '{}'", condition, text),
                    None => format!("{}; element was never visible", condition),
                }));
            }
        }
        PostCondition::PageContains(needle) => {
            if !wait::page_contains(driver, policy, needle).await? {
                return Err(HarnessError::AssertionFailed(condition.to_string()));
            }
        }
        PostCondition::PageExcludes(needle) => {
            if !wait::page_excludes(driver, policy, needle).await? {
                return Err(HarnessError::AssertionFailed(condition.to_string()));
            }
        }
    }
    Ok(())
}

/// Drive one workflow from navigation through verification. Terminal
/// states: `Ok(())` once the post-condition held, or the first
/// unrecoverable step error; no retries beyond the wait-poll embedded in
/// each step.
pub async fn execute(session: &Session, workflow: &Workflow) -> HarnessResult<()> {
    info!(workflow = %workflow.name, "starting workflow");

    if let Some(page) = &workflow.page {
        session.goto(page).await?;
    }

    run_steps(session, &workflow.steps).await?;

    if workflow.confirmations > 0 {
        let ok_button = workflow.dialog_ok.as_ref().ok_or_else(|| {
            HarnessError::InteractionTimeout(format!(
                "workflow '{}' expects {} confirmations but no dialog locator was configured",
                workflow.name, workflow.confirmations
            ))
        })?;
        confirm_dialogs(session, ok_button, workflow.confirmations).await?;
    }

    if let Some(condition) = &workflow.postcondition {
        verify(session, condition).await?;
    }

    info!(workflow = %workflow.name, "workflow verified");
    Ok(())
}
