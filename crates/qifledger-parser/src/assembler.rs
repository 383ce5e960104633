//! Classification of transactions and registration of the names they mention.

use crate::result::ParseResult;
use qifledger_core::{Account, NameSet, Transaction};

/// Where a transaction ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Set the account's opening balance; not part of the register.
    OpeningBalance,
    /// Appended to the account's register.
    Register,
}

/// Collects payees, classes and referenced categories while transactions are
/// read, and folds them into the result once input is exhausted.
#[derive(Debug, Clone)]
pub struct EntityAssembler {
    opening_balance_payee: String,
    payees: NameSet,
    classes: NameSet,
    categories: NameSet,
}

impl EntityAssembler {
    /// Create an assembler that treats `opening_balance_payee` as the
    /// opening-balance sentinel.
    pub fn new(opening_balance_payee: impl Into<String>) -> Self {
        Self {
            opening_balance_payee: opening_balance_payee.into(),
            payees: NameSet::new(),
            classes: NameSet::new(),
            categories: NameSet::new(),
        }
    }

    /// Classify a transaction and file it under `account`.
    pub fn accept(&mut self, account: &mut Account, txn: Transaction) -> Placement {
        if txn.is_opening_balance(&self.opening_balance_payee) {
            account.set_opening_balance(txn.amount, txn.to_account.as_deref());
            return Placement::OpeningBalance;
        }

        if let Some(payee) = txn.payee.as_deref() {
            self.payees.insert(payee);
        }
        if txn.is_split() {
            for split in &txn.splits {
                self.register_leaf(
                    split.category.as_deref(),
                    split.class.as_deref(),
                    split.is_transfer(),
                );
            }
        } else {
            self.register_leaf(txn.category.as_deref(), txn.class.as_deref(), txn.is_transfer());
        }

        account.transactions.push(txn);
        Placement::Register
    }

    fn register_leaf(&mut self, category: Option<&str>, class: Option<&str>, transfer: bool) {
        if let Some(class) = class {
            self.classes.insert(class);
        }
        if transfer {
            return;
        }
        if let Some(category) = category {
            self.categories.insert(category);
        }
    }

    /// Names of categories referenced so far.
    pub const fn referenced_categories(&self) -> &NameSet {
        &self.categories
    }

    /// Move the collected names into `result`, merging referenced categories
    /// into the declared ones.
    pub fn finish(self, result: &mut ParseResult) {
        let added = result.categories.merge_implicit(&self.categories);
        tracing::debug!(
            referenced = self.categories.len(),
            added,
            payees = self.payees.len(),
            classes = self.classes.len(),
            "merged referenced categories"
        );
        result.payees = self.payees;
        result.classes = self.classes;
    }
}

impl Default for EntityAssembler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_OPENING_BALANCE_PAYEE)
    }
}
