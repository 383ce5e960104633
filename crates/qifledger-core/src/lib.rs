//! Core types for qifledger
//!
//! This crate provides the data model produced by the interchange-file parser:
//!
//! - [`Amount`] - A fixed-point decimal scoped to one currency
//! - [`Currency`] - A currency code with its minor-unit precision
//! - [`Account`] - An account declaration plus its ordered register
//! - [`Transaction`] / [`Split`] - Register entries and their split portions
//! - [`Category`] / [`CategorySet`] - Declared and referenced categories
//! - [`NameSet`] - Deduplicating, order-preserving set of payee/class names
//!
//! # Example
//!
//! ```
//! use qifledger_core::{Account, Amount, Transaction};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let mut checking = Account::new("Checking").with_type("Bank");
//! checking.set_opening_balance(Amount::new(dec!(500.00), "USD"), None);
//! checking.transactions.push(
//!     Transaction::new(Amount::new(dec!(-42.10), "USD"))
//!         .with_date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
//!         .with_payee("Grocery Store")
//!         .with_category("Food:Groceries"),
//! );
//!
//! assert_eq!(checking.closing_balance().unwrap().number, dec!(457.90));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod amount;
pub mod category;
pub mod currency;
pub mod format;
pub mod intern;
pub mod transaction;

pub use account::Account;
pub use amount::Amount;
pub use category::{Category, CategorySet, CATEGORY_SEPARATOR};
pub use currency::{Currency, CurrencyError};
pub use format::{format_account, format_transaction, FormatConfig};
pub use intern::{InternedStr, NameSet};
pub use transaction::{ClearedStatus, Split, Transaction};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
