//! SpendWise UI regression suite
//!
//! Application-specific glue over `spendwise-harness`: the locator tables,
//! the CRUD workflows for categories, wallets, transactions, and budgets,
//! and the ordered test cases that share one authenticated session.
//!
//! Run with a live browser via the `regression` test binary:
//!
//! ```text
//! SPENDWISE_E2E=1 cargo test -p spendwise-suite --test regression -- \
//!     --base-url http://127.0.0.1:3000 --webdriver-url http://127.0.0.1:9515
//! ```

pub mod cases;
pub mod config;
pub mod flows;
pub mod locators;

pub use cases::all_cases;
pub use config::SuiteConfig;
pub use locators::SuiteLocators;
