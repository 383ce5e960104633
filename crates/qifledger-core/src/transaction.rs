//! Transactions and their split sub-entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::Amount;

/// Reconciliation state carried by the `C` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    /// No status field, or an unrecognized one.
    #[default]
    Uncleared,
    /// `*` or `c`.
    Cleared,
    /// `X` or `R`.
    Reconciled,
}

impl ClearedStatus {
    /// Interpret the value of a status field.
    pub fn from_field(value: &str) -> Self {
        match value.trim() {
            "*" | "c" | "C" => Self::Cleared,
            "X" | "x" | "R" | "r" => Self::Reconciled,
            _ => Self::Uncleared,
        }
    }

    /// Single-character marker used in register listings.
    pub const fn marker(self) -> char {
        match self {
            Self::Uncleared => ' ',
            Self::Cleared => '*',
            Self::Reconciled => 'X',
        }
    }
}

impl fmt::Display for ClearedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncleared => f.write_str("uncleared"),
            Self::Cleared => f.write_str("cleared"),
            Self::Reconciled => f.write_str("reconciled"),
        }
    }
}

/// One portion of a split transaction.
///
/// Splits are always leaves: they carry the category, class or transfer
/// target their portion of the amount is booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Portion of the parent amount
    pub amount: Amount,
    /// Category name, possibly `Parent:Child`
    pub category: Option<String>,
    /// Class name
    pub class: Option<String>,
    /// Peer account when this portion is a transfer
    pub to_account: Option<String>,
    /// Split memo
    pub memo: Option<String>,
    /// Percentage of the parent, when the file states one
    pub percentage: Option<Decimal>,
}

impl Split {
    /// Create a split for the given amount.
    #[must_use]
    pub const fn new(amount: Amount) -> Self {
        Self {
            amount,
            category: None,
            class: None,
            to_account: None,
            memo: None,
            percentage: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Mark this portion as a transfer to `account`.
    #[must_use]
    pub fn with_transfer(mut self, account: impl Into<String>) -> Self {
        self.to_account = Some(account.into());
        self
    }

    /// Set the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Whether this portion moves money to another account.
    pub const fn is_transfer(&self) -> bool {
        self.to_account.is_some()
    }
}

/// A single register entry of an account.
///
/// A transaction with splits is categorized only through its splits; its own
/// `category` and `class` fields are placeholders and are never registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: Option<NaiveDate>,
    /// Signed total
    pub amount: Amount,
    /// Payee (optional)
    pub payee: Option<String>,
    /// Category name, possibly `Parent:Child`
    pub category: Option<String>,
    /// Class name
    pub class: Option<String>,
    /// Free-text memo
    pub memo: Option<String>,
    /// Check or reference number
    pub number: Option<String>,
    /// Reconciliation state
    pub status: ClearedStatus,
    /// Peer account when this is a transfer
    pub to_account: Option<String>,
    /// Payee address lines
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub address: Vec<String>,
    /// Split portions, empty for a leaf transaction
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub splits: Vec<Split>,
}

impl Transaction {
    /// Create a new transaction.
    #[must_use]
    pub const fn new(amount: Amount) -> Self {
        Self {
            date: None,
            amount,
            payee: None,
            category: None,
            class: None,
            memo: None,
            number: None,
            status: ClearedStatus::Uncleared,
            to_account: None,
            address: Vec::new(),
            splits: Vec::new(),
        }
    }

    /// Set the date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the payee.
    #[must_use]
    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Set the reference number.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Set the cleared status.
    #[must_use]
    pub const fn with_status(mut self, status: ClearedStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark this transaction as a transfer to `account`.
    #[must_use]
    pub fn with_transfer(mut self, account: impl Into<String>) -> Self {
        self.to_account = Some(account.into());
        self
    }

    /// Add a split.
    #[must_use]
    pub fn with_split(mut self, split: Split) -> Self {
        self.splits.push(split);
        self
    }

    /// Whether the amount is distributed over splits.
    pub fn is_split(&self) -> bool {
        !self.splits.is_empty()
    }

    /// Whether this transaction moves money to a peer account.
    pub const fn is_transfer(&self) -> bool {
        self.to_account.is_some()
    }

    /// Whether this is the synthetic record that sets an account's starting
    /// balance, recognized by its payee matching `sentinel_payee`.
    pub fn is_opening_balance(&self, sentinel_payee: &str) -> bool {
        self.payee
            .as_deref()
            .is_some_and(|p| p.trim().eq_ignore_ascii_case(sentinel_payee))
    }

    /// Sum of the split amounts, or `None` for a leaf transaction.
    pub fn split_total(&self) -> Option<Amount> {
        let (first, rest) = self.splits.split_first()?;
        let mut total = first.amount.clone();
        for split in rest {
            total += &split.amount;
        }
        Some(total)
    }
}
