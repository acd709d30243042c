//! SpendWise browser-test harness
//!
//! A reusable core for browser-driven acceptance suites:
//! - one authenticated session shared across an ordered group of dependent
//!   test cases, torn down exactly once;
//! - a resilient wait/interaction protocol that polls elements until ready,
//!   executes multi-step workflows, and dismisses confirmation dialogs.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     SuiteRunner                            │
//! │   register(TestCase { name, priority })                    │
//! │   run(session) -> SuiteReport        dispose exactly once  │
//! ├────────────────────────────────────────────────────────────┤
//! │  Session (one authenticated browser session)               │
//! │    create() -> probe app, login, wait for marker           │
//! │    goto / driver / dispose                                 │
//! ├────────────────────────────────────────────────────────────┤
//! │  Workflow = navigate → [InteractionStep] → confirmations   │
//! │             → PostCondition                                │
//! │  every step: wait-poll until interactable, then act        │
//! ├────────────────────────────────────────────────────────────┤
//! │  PageDriver / PageElement (capability traits)              │
//! │    WebDriverBackend (thirtyfour) │ scripted test drivers   │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod driver;
pub mod error;
pub mod locator;
pub mod runner;
pub mod session;
pub mod step;
pub mod wait;

#[cfg(test)]
pub(crate) mod testutil;

pub use driver::{PageDriver, PageElement};
pub use error::{HarnessError, HarnessResult};
pub use locator::Locator;
pub use runner::{CaseResult, SuiteReport, SuiteRunner, TestCase};
pub use session::{Credentials, LoginForm, Session, SessionConfig};
pub use step::{InteractionStep, PostCondition, StepAction, Workflow};
pub use wait::WaitPolicy;
