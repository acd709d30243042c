//! Ordered regression cases
//!
//! The cases share one authenticated session and depend on one another's
//! side effects: the category created by `category_add` is the row
//! `category_edit` renames and `category_delete` removes. Each case carries
//! an explicit priority, and the runner executes them strictly sequentially
//! in ascending order. The wallet is deleted last so it outlives the
//! transaction cases.

use async_trait::async_trait;

use spendwise_harness::{step, HarnessResult, Session, TestCase, Workflow};

use crate::flows;
use crate::locators::SuiteLocators;

pub const CATEGORY_NAME: &str = "Jolibee";
pub const CATEGORY_COLOR: &str = "#008000";
pub const CATEGORY_RENAMED: &str = "Mcdo";
pub const CATEGORY_RECOLORED: &str = "#FFFF00";

pub const WALLET_NAME: &str = "GCASH";
pub const WALLET_BALANCE: u64 = 10_000;
pub const WALLET_RENAMED: &str = "GoTyme";
pub const WALLET_REBALANCED: u64 = 15_000;

pub const TRANSACTION_AMOUNT: u64 = 500;
pub const TRANSACTION_NOTE: &str = "lunch";
pub const TRANSACTION_EDITED_AMOUNT: u64 = 1_500;

pub const BUDGET_NAME: &str = "Groceries";
pub const BUDGET_AMOUNT: u64 = 5_000;
pub const BUDGET_RENAMED: &str = "Utilities";
pub const BUDGET_EDITED_AMOUNT: u64 = 8_000;

/// A test case that drives one workflow to its verified state.
struct FlowCase {
    name: &'static str,
    priority: i32,
    workflow: Workflow,
}

#[async_trait]
impl TestCase for FlowCase {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    async fn run(&self, session: &mut Session) -> HarnessResult<()> {
        step::execute(session, &self.workflow).await
    }
}

fn flow_case(name: &'static str, priority: i32, workflow: Workflow) -> Box<dyn TestCase> {
    Box::new(FlowCase {
        name,
        priority,
        workflow,
    })
}

/// The full ordered suite.
pub fn all_cases(loc: &SuiteLocators) -> Vec<Box<dyn TestCase>> {
    vec![
        flow_case(
            "category_add",
            1,
            flows::add_category(loc, CATEGORY_NAME, CATEGORY_COLOR),
        ),
        flow_case(
            "category_edit",
            2,
            flows::edit_category(loc, CATEGORY_RENAMED, CATEGORY_RECOLORED),
        ),
        flow_case(
            "category_delete",
            3,
            flows::delete_category(loc, CATEGORY_RENAMED),
        ),
        flow_case(
            "wallet_add",
            4,
            flows::add_wallet(loc, WALLET_NAME, WALLET_BALANCE),
        ),
        flow_case(
            "wallet_edit",
            5,
            flows::edit_wallet(loc, WALLET_RENAMED, WALLET_REBALANCED),
        ),
        flow_case(
            "transaction_add",
            6,
            flows::add_transaction(loc, TRANSACTION_AMOUNT, TRANSACTION_NOTE),
        ),
        flow_case(
            "transaction_edit",
            7,
            flows::edit_transaction(loc, TRANSACTION_EDITED_AMOUNT),
        ),
        flow_case(
            "transaction_delete",
            8,
            flows::delete_transaction(loc, TRANSACTION_EDITED_AMOUNT),
        ),
        flow_case(
            "budget_add",
            9,
            flows::add_budget(loc, BUDGET_NAME, BUDGET_AMOUNT),
        ),
        flow_case(
            "budget_edit",
            10,
            flows::edit_budget(loc, BUDGET_RENAMED, BUDGET_EDITED_AMOUNT),
        ),
        flow_case(
            "budget_delete",
            11,
            flows::delete_budget(loc, BUDGET_RENAMED),
        ),
        flow_case("wallet_delete", 12, flows::delete_wallet(loc, WALLET_RENAMED)),
    ]
}
