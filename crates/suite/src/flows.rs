//! SpendWise CRUD workflows
//!
//! Each workflow is an ordered list of interaction steps plus the number of
//! confirmation dialogs the save/delete action triggers and the observable
//! post-condition that terminates it in `Verified`. Saving pops one notice
//! dialog; deleting pops a confirmation and then a notice, so deletes
//! dismiss two.

use spendwise_harness::{InteractionStep, PostCondition, Workflow};

use crate::locators::SuiteLocators;

/// Render an expense amount the way the app formats it: `-₱ 1,500.00`.
pub fn expense_amount(amount: u64) -> String {
    format!("-₱ {}.00", group_thousands(amount))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn add_category(loc: &SuiteLocators, name: &str, color: &str) -> Workflow {
    Workflow::new("add category")
        .on_page("categories")
        .step(InteractionStep::click(
            "open category form",
            loc.categories.add_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "enter category name",
            loc.categories.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "enter category color",
            loc.categories.color_input.clone(),
            color,
        ))
        .step(InteractionStep::click(
            "save category",
            loc.categories.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::PageContains(name.to_string()))
}

pub fn edit_category(loc: &SuiteLocators, name: &str, color: &str) -> Workflow {
    Workflow::new("edit category")
        .on_page("categories")
        .step(InteractionStep::click(
            "open first category for editing",
            loc.categories.edit_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "replace category name",
            loc.categories.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "replace category color",
            loc.categories.color_input.clone(),
            color,
        ))
        .step(InteractionStep::click(
            "save category",
            loc.categories.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::PageContains(name.to_string()))
}

pub fn delete_category(loc: &SuiteLocators, name: &str) -> Workflow {
    Workflow::new("delete category")
        .on_page("categories")
        .step(InteractionStep::click(
            "delete first category",
            loc.categories.delete_button.clone(),
        ))
        .confirmations(2, loc.dialog_ok.clone())
        .expect(PostCondition::PageExcludes(name.to_string()))
}

pub fn add_wallet(loc: &SuiteLocators, name: &str, balance: u64) -> Workflow {
    Workflow::new("add wallet")
        .on_page("wallets")
        .step(InteractionStep::click(
            "open wallet form",
            loc.wallets.add_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "enter wallet name",
            loc.wallets.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "enter wallet balance",
            loc.wallets.balance_input.clone(),
            balance.to_string(),
        ))
        .step(InteractionStep::click(
            "save wallet",
            loc.wallets.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::ElementTextEquals {
            target: loc.wallets.row_name.clone(),
            expected: name.to_string(),
        })
}

pub fn edit_wallet(loc: &SuiteLocators, name: &str, balance: u64) -> Workflow {
    Workflow::new("edit wallet")
        .on_page("wallets")
        .step(InteractionStep::click(
            "open first wallet for editing",
            loc.wallets.edit_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "replace wallet name",
            loc.wallets.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "replace wallet balance",
            loc.wallets.balance_input.clone(),
            balance.to_string(),
        ))
        .step(InteractionStep::click(
            "save wallet",
            loc.wallets.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::ElementTextEquals {
            target: loc.wallets.row_name.clone(),
            expected: name.to_string(),
        })
}

pub fn delete_wallet(loc: &SuiteLocators, name: &str) -> Workflow {
    Workflow::new("delete wallet")
        .on_page("wallets")
        .step(InteractionStep::click(
            "delete first wallet",
            loc.wallets.delete_button.clone(),
        ))
        .confirmations(2, loc.dialog_ok.clone())
        .expect(PostCondition::PageExcludes(name.to_string()))
}

pub fn add_transaction(loc: &SuiteLocators, amount: u64, note: &str) -> Workflow {
    Workflow::new("add transaction")
        .on_page("transactions")
        .step(InteractionStep::click(
            "open transaction form",
            loc.transactions.add_button.clone(),
        ))
        .step(InteractionStep::select_option(
            "choose transaction type",
            loc.transactions.type_select.clone(),
            "expense",
        ))
        .step(InteractionStep::type_text(
            "enter transaction amount",
            loc.transactions.amount_input.clone(),
            amount.to_string(),
        ))
        .step(InteractionStep::type_text(
            "enter transaction note",
            loc.transactions.note_input.clone(),
            note,
        ))
        .step(InteractionStep::click(
            "record transaction",
            loc.transactions.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::PageContains(amount.to_string()))
}

pub fn edit_transaction(loc: &SuiteLocators, amount: u64) -> Workflow {
    Workflow::new("edit transaction")
        .on_page("transactions")
        .step(InteractionStep::click(
            "open first transaction for editing",
            loc.transactions.edit_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "replace transaction amount",
            loc.transactions.amount_input.clone(),
            amount.to_string(),
        ))
        .step(InteractionStep::click(
            "record transaction",
            loc.transactions.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::ElementTextContains {
            target: loc.transactions.row_amount.clone(),
            expected: expense_amount(amount),
        })
}

pub fn delete_transaction(loc: &SuiteLocators, amount: u64) -> Workflow {
    Workflow::new("delete transaction")
        .on_page("transactions")
        .step(InteractionStep::click(
            "delete first transaction",
            loc.transactions.delete_button.clone(),
        ))
        .confirmations(2, loc.dialog_ok.clone())
        .expect(PostCondition::PageExcludes(expense_amount(amount)))
}

pub fn add_budget(loc: &SuiteLocators, name: &str, amount: u64) -> Workflow {
    Workflow::new("add budget")
        .on_page("budgets")
        .step(InteractionStep::click(
            "open budget form",
            loc.budgets.add_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "enter budget name",
            loc.budgets.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "enter budget amount",
            loc.budgets.amount_input.clone(),
            amount.to_string(),
        ))
        .step(InteractionStep::click(
            "save budget",
            loc.budgets.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::PageContains(name.to_string()))
}

pub fn edit_budget(loc: &SuiteLocators, name: &str, amount: u64) -> Workflow {
    Workflow::new("edit budget")
        .on_page("budgets")
        .step(InteractionStep::click(
            "open first budget for editing",
            loc.budgets.edit_button.clone(),
        ))
        .step(InteractionStep::type_text(
            "replace budget name",
            loc.budgets.name_input.clone(),
            name,
        ))
        .step(InteractionStep::type_text(
            "replace budget amount",
            loc.budgets.amount_input.clone(),
            amount.to_string(),
        ))
        .step(InteractionStep::click(
            "save budget",
            loc.budgets.save_button.clone(),
        ))
        .confirmations(1, loc.dialog_ok.clone())
        .expect(PostCondition::PageContains(name.to_string()))
}

pub fn delete_budget(loc: &SuiteLocators, name: &str) -> Workflow {
    Workflow::new("delete budget")
        .on_page("budgets")
        .step(InteractionStep::click(
            "delete first budget",
            loc.budgets.delete_button.clone(),
        ))
        .confirmations(2, loc.dialog_ok.clone())
        .expect(PostCondition::PageExcludes(name.to_string()))
}
