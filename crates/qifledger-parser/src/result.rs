//! The accumulated output of a parse.

use qifledger_core::{Account, CategorySet, NameSet};
use serde::Serialize;

/// Accounts, categories, payees and classes read from one file.
///
/// Accounts keep first-seen order and each holds its register in file order.
/// The three name sets are deduplicated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    /// Accounts in the order they were first seen.
    pub accounts: Vec<Account>,
    /// Declared categories plus every category referenced by a transaction.
    pub categories: CategorySet,
    /// Payees of every transaction except opening-balance records.
    pub payees: NameSet,
    /// Classes referenced by transactions and splits.
    pub classes: NameSet,
    /// Input ended inside an auto-switch region.
    pub truncated: bool,
}

impl ParseResult {
    /// Look up an account by name.
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// Total number of register entries across all accounts.
    pub fn transaction_count(&self) -> usize {
        self.accounts.iter().map(|a| a.transactions.len()).sum()
    }

    /// Whether nothing at all was read.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.categories.is_empty()
            && self.payees.is_empty()
            && self.classes.is_empty()
    }
}
