//! Accounts: a declaration plus the ordered register read for it.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::transaction::Transaction;

/// An account and its transactions, in file order.
///
/// Accounts whose transactions appear without a preceding declaration are
/// anonymous: their name and type are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account name (empty for anonymous accounts)
    pub name: String,
    /// Free-text type tag such as `Bank`, `CCard` or `Cash`
    pub account_type: String,
    /// Description, or the transfer hint of the opening-balance record
    pub memo: Option<String>,
    /// Credit limit declared for credit card accounts
    pub credit_limit: Option<Amount>,
    /// Starting balance taken from the opening-balance record
    pub opening_balance: Option<Amount>,
    /// Register entries in file order
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create a named account.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an anonymous account.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the type tag.
    #[must_use]
    pub fn with_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    /// Set the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Whether the account was never declared by name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Use `account_type` unless a type was already declared.
    pub fn default_type(&mut self, account_type: &str) {
        if self.account_type.is_empty() {
            self.account_type = account_type.trim().to_string();
        }
    }

    /// Fill fields left empty here from a later declaration of the same account.
    pub fn absorb_declaration(&mut self, other: Self) {
        if self.account_type.is_empty() {
            self.account_type = other.account_type;
        }
        if self.memo.is_none() {
            self.memo = other.memo;
        }
        if self.credit_limit.is_none() {
            self.credit_limit = other.credit_limit;
        }
    }

    /// Record the amount of an opening-balance record.
    ///
    /// A later opening-balance record replaces the earlier amount. The transfer
    /// hint, when present, becomes the account memo.
    pub fn set_opening_balance(&mut self, amount: Amount, transfer_hint: Option<&str>) {
        self.opening_balance = Some(amount);
        if let Some(hint) = transfer_hint.filter(|h| !h.is_empty()) {
            self.memo = Some(hint.to_string());
        }
    }

    /// Sum of the opening balance and every transaction amount.
    ///
    /// Returns `None` when the account holds neither.
    pub fn closing_balance(&self) -> Option<Amount> {
        let mut amounts = self
            .opening_balance
            .iter()
            .chain(self.transactions.iter().map(|t| &t.amount));
        let mut total = amounts.next()?.clone();
        for amount in amounts {
            total += amount;
        }
        Some(total)
    }
}
