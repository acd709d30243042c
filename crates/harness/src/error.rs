//! Error types for the browser-test harness

use thiserror::Error;

/// Result type alias using the harness error
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    /// Login or environment setup did not complete. Fatal: the whole run
    /// is aborted because no test case can run without the session.
    #[error("setup failed: {0}")]
    SetupFailure(String),

    /// The session was used after `dispose()`.
    #[error("browser session already disposed")]
    SessionDisposed,

    /// The element targeted by a step never became interactable within
    /// the wait timeout. Names the logical step, not the raw driver call.
    #[error("step '{step}' failed: element {locator} not found within timeout")]
    ElementNotFound { step: String, locator: String },

    /// A confirmation dialog or multi-step action did not complete in time.
    #[error("interaction timeout: {0}")]
    InteractionTimeout(String),

    /// The workflow executed but produced the wrong observable state.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// Underlying browser-driver failure.
    #[error("driver error: {0}")]
    Driver(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
