//! Register-style text rendering of accounts and transactions.
//!
//! Produces a human-readable listing with amounts aligned to a configurable
//! column. This is a report format, not an interchange format: nothing here
//! is meant to be read back.

use crate::{Account, Split, Transaction};
use std::fmt::Write;

/// Formatter configuration.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Column to align amounts to (default: 60).
    pub amount_column: usize,
    /// Indentation for transactions under an account.
    pub indent: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            amount_column: 60,
            indent: "  ".to_string(),
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified amount column.
    #[must_use]
    pub fn with_column(column: usize) -> Self {
        Self {
            amount_column: column,
            ..Default::default()
        }
    }
}

/// Format an account header followed by its register.
pub fn format_account(account: &Account, config: &FormatConfig) -> String {
    let mut out = String::new();

    let name = if account.is_anonymous() {
        "<anonymous>"
    } else {
        account.name.as_str()
    };
    write!(out, "{name}").unwrap();
    if !account.account_type.is_empty() {
        write!(out, " ({})", account.account_type).unwrap();
    }
    out.push('\n');

    if let Some(memo) = &account.memo {
        writeln!(out, "{}; {memo}", config.indent).unwrap();
    }
    if let Some(limit) = &account.credit_limit {
        writeln!(out, "{}; credit limit {limit}", config.indent).unwrap();
    }
    if let Some(opening) = &account.opening_balance {
        let mut line = format!("{}opening balance", config.indent);
        pad_to_column(&mut line, config.amount_column);
        writeln!(out, "{line}{opening}").unwrap();
    }

    for txn in &account.transactions {
        out.push_str(&format_transaction(txn, config));
    }

    out
}

/// Format one transaction, with its splits on indented lines below it.
pub fn format_transaction(txn: &Transaction, config: &FormatConfig) -> String {
    let mut line = config.indent.clone();

    match txn.date {
        Some(date) => write!(line, "{date}").unwrap(),
        None => line.push_str("----------"),
    }
    write!(line, " {}", txn.status.marker()).unwrap();

    if let Some(number) = &txn.number {
        write!(line, " #{number}").unwrap();
    }
    if let Some(payee) = &txn.payee {
        write!(line, " {payee}").unwrap();
    }

    let target = if txn.is_split() {
        "split".to_string()
    } else {
        booking_target(
            txn.category.as_deref(),
            txn.class.as_deref(),
            txn.to_account.as_deref(),
        )
    };
    write!(line, " ({target})").unwrap();

    if let Some(memo) = &txn.memo {
        write!(line, " ; {memo}").unwrap();
    }

    pad_to_column(&mut line, config.amount_column);
    let mut out = format!("{line}{}\n", txn.amount);

    for split in &txn.splits {
        out.push_str(&format_split(split, config));
    }
    out
}

fn format_split(split: &Split, config: &FormatConfig) -> String {
    let mut line = format!(
        "{}{}{}",
        config.indent,
        config.indent,
        booking_target(
            split.category.as_deref(),
            split.class.as_deref(),
            split.to_account.as_deref(),
        )
    );
    if let Some(memo) = &split.memo {
        write!(line, " ; {memo}").unwrap();
    }
    pad_to_column(&mut line, config.amount_column);
    format!("{line}{}\n", split.amount)
}

/// Describe where an amount is booked: a transfer target, a category, or nothing.
fn booking_target(category: Option<&str>, class: Option<&str>, to_account: Option<&str>) -> String {
    let mut target = match (to_account, category) {
        (Some(account), _) => format!("[{account}]"),
        (None, Some(category)) => category.to_string(),
        (None, None) => "uncategorized".to_string(),
    };
    if let Some(class) = class {
        write!(target, "/{class}").unwrap();
    }
    target
}

fn pad_to_column(line: &mut String, column: usize) {
    let width = line.chars().count();
    if width + 2 <= column {
        line.push_str(&" ".repeat(column - width));
    } else {
        line.push_str("  ");
    }
}
