//! QIF command-line tools.
//!
//! This crate provides command-line tools for working with QIF exports:
//!
//! - `qif-extract`: Parse a QIF file and print its accounts, registers,
//!   categories, payees and classes as text or JSON
//!
//! # Example Usage
//!
//! ```bash
//! qif-extract export.qif
//! qif-extract export.qif --date-format eu --currency EUR --format json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
