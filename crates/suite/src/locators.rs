//! SpendWise element locators
//!
//! Pure fixture data. Most paths are fixed tree positions mirroring the
//! application's rendered structure; they are brittle by nature, so the
//! whole table is injectable and can be overridden (fully or partially)
//! from a YAML file instead of recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use spendwise_harness::{HarnessResult, Locator, LoginForm};

/// Every locator the suite touches, grouped by page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteLocators {
    pub login: LoginForm,

    /// OK button of the transient confirmation dialogs. One fixed path
    /// serves every workflow; an application rendering dialogs at varying
    /// positions would defeat it (kept from the original behavior).
    pub dialog_ok: Locator,

    pub categories: CategoryLocators,
    pub wallets: WalletLocators,
    pub transactions: TransactionLocators,
    pub budgets: BudgetLocators,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLocators {
    pub add_button: Locator,
    pub name_input: Locator,
    pub color_input: Locator,
    pub save_button: Locator,
    pub edit_button: Locator,
    pub delete_button: Locator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletLocators {
    pub add_button: Locator,
    pub name_input: Locator,
    pub balance_input: Locator,
    pub save_button: Locator,
    pub edit_button: Locator,
    pub delete_button: Locator,
    /// Name heading of the first wallet card
    pub row_name: Locator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionLocators {
    pub add_button: Locator,
    pub type_select: Locator,
    pub amount_input: Locator,
    pub note_input: Locator,
    pub save_button: Locator,
    pub edit_button: Locator,
    pub delete_button: Locator,
    /// Amount cell of the first transaction row
    pub row_amount: Locator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetLocators {
    pub add_button: Locator,
    pub name_input: Locator,
    pub amount_input: Locator,
    pub save_button: Locator,
    pub edit_button: Locator,
    pub delete_button: Locator,
}

impl Default for SuiteLocators {
    fn default() -> Self {
        Self {
            login: LoginForm {
                username_input: Locator::id("email"),
                password_input: Locator::id("password"),
                submit_button: Locator::xpath("//form//button[@type='submit']"),
                signed_in_marker: Locator::xpath("/html/body/div[1]/div/aside/div[1]/span"),
            },
            dialog_ok: Locator::xpath("/html/body/div[5]/div/div[6]/button[1]"),
            categories: CategoryLocators::default(),
            wallets: WalletLocators::default(),
            transactions: TransactionLocators::default(),
            budgets: BudgetLocators::default(),
        }
    }
}

impl Default for CategoryLocators {
    fn default() -> Self {
        Self {
            add_button: Locator::xpath("/html/body/div[1]/div/main/div/div[1]/button"),
            name_input: Locator::id("category-name"),
            color_input: Locator::id("category-color"),
            save_button: Locator::xpath("//form//button[text()='Save']"),
            edit_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[3]/button[1]",
            ),
            delete_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[3]/button[2]",
            ),
        }
    }
}

impl Default for WalletLocators {
    fn default() -> Self {
        Self {
            add_button: Locator::xpath("/html/body/div[1]/div/main/section/div[1]/button"),
            name_input: Locator::id("wallet-name"),
            balance_input: Locator::id("wallet-balance"),
            save_button: Locator::xpath("//form//button[text()='Save Wallet']"),
            edit_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/div[2]/div[1]/div/button[1]",
            ),
            delete_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/div[2]/div[1]/div/button[2]",
            ),
            row_name: Locator::xpath("/html/body/div[1]/div/main/div/div[2]/div[1]/h3"),
        }
    }
}

impl Default for TransactionLocators {
    fn default() -> Self {
        Self {
            add_button: Locator::xpath("/html/body/div[1]/div/main/div[1]/header/button"),
            type_select: Locator::id("transaction-type"),
            amount_input: Locator::id("transaction-amount"),
            note_input: Locator::id("transaction-note"),
            save_button: Locator::xpath("//form//button[text()='Record']"),
            edit_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[5]/button[1]",
            ),
            delete_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[5]/button[2]",
            ),
            row_amount: Locator::xpath("/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[4]"),
        }
    }
}

impl Default for BudgetLocators {
    fn default() -> Self {
        Self {
            add_button: Locator::xpath("/html/body/div[1]/div/main/header/div/button"),
            name_input: Locator::id("budget-name"),
            amount_input: Locator::id("budget-amount"),
            save_button: Locator::xpath("//form//button[text()='Save Budget']"),
            edit_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[4]/button[1]",
            ),
            delete_button: Locator::xpath(
                "/html/body/div[1]/div/main/div/table/tbody/tr[1]/td[4]/button[2]",
            ),
        }
    }
}

impl SuiteLocators {
    /// Parse locator overrides from YAML. Missing fields keep defaults.
    pub fn from_yaml(yaml: &str) -> HarnessResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load locator overrides from a YAML file.
    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
