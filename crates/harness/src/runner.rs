//! Ordered suite runner
//!
//! Test cases declare an integer priority and run strictly sequentially in
//! ascending priority order against the one shared session. Sequencing is a
//! correctness requirement, not a performance choice: cases mutate shared
//! server-side state, and a case routinely edits what the previous case
//! created. The session is disposed exactly once after the last case,
//! whatever the individual outcomes.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::HarnessResult;
use crate::session::Session;

/// A named test case with a declared run order.
#[async_trait]
pub trait TestCase: Send + Sync {
    fn name(&self) -> &str;

    /// Lower priorities run first. Ties keep registration order.
    fn priority(&self) -> i32;

    async fn run(&self, session: &mut Session) -> HarnessResult<()>;
}

/// Outcome of one test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub priority: i32,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Outcome of the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Write the report as pretty JSON into `dir`.
    pub fn write_to(&self, dir: &Path) -> HarnessResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("regression-report.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("report written to {}", path.display());
        Ok(path)
    }
}

/// Executes registered cases in priority order over one shared session.
#[derive(Default)]
pub struct SuiteRunner {
    cases: Vec<Box<dyn TestCase>>,
}

impl SuiteRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, case: Box<dyn TestCase>) {
        self.cases.push(case);
    }

    pub fn register_all(&mut self, cases: Vec<Box<dyn TestCase>>) {
        self.cases.extend(cases);
    }

    /// Run every case in ascending priority order, then dispose the
    /// session. Consumes both so teardown cannot be skipped or repeated.
    pub async fn run(mut self, mut session: Session) -> SuiteReport {
        // Stable: first-registered wins ties.
        self.cases.sort_by_key(|case| case.priority());

        let start = Instant::now();
        let mut results = Vec::with_capacity(self.cases.len());
        let mut passed = 0;
        let mut failed = 0;

        info!("running {} test case(s)...", self.cases.len());

        for case in &self.cases {
            let case_start = Instant::now();
            let outcome = case.run(&mut session).await;
            let duration_ms = case_start.elapsed().as_millis() as u64;

            match outcome {
                Ok(()) => {
                    passed += 1;
                    info!("✓ {} ({} ms)", case.name(), duration_ms);
                    results.push(CaseResult {
                        name: case.name().to_string(),
                        priority: case.priority(),
                        passed: true,
                        duration_ms,
                        error: None,
                    });
                }
                Err(e) => {
                    failed += 1;
                    error!("✗ {} - {}", case.name(), e);
                    results.push(CaseResult {
                        name: case.name().to_string(),
                        priority: case.priority(),
                        passed: false,
                        duration_ms,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        if let Err(e) = session.dispose().await {
            warn!("session teardown reported an error: {}", e);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteReport {
            total: results.len(),
            passed,
            failed,
            duration_ms,
            results,
        }
    }
}
