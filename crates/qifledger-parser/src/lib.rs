//! Parser for QIF (Quicken Interchange Format) files.
//!
//! This crate reads the block-structured, tag-per-line QIF grammar and
//! produces a [`ParseResult`]: the accounts in the file with their registers,
//! plus deduplicated sets of the categories, payees and classes they mention.
//!
//! # Features
//!
//! - Auto-switch account lists, account blocks, category lists and
//!   transaction registers, recognized with one line of lookahead
//! - Split transactions, transfers and opening-balance records
//! - US, European and year-first date orders
//! - Locale-tolerant amount parsing scaled to the configured currency
//!
//! # Example
//!
//! ```
//! use qifledger_parser::{parse, ParserConfig};
//!
//! let source = "\
//! !Type:Bank
//! D01/15/2024
//! T-4.50
//! PCoffee Shop
//! LFood:Coffee
//! ^
//! ";
//!
//! let result = parse(source, &ParserConfig::default()).unwrap();
//! assert_eq!(result.accounts.len(), 1);
//! assert!(result.categories.contains("Food:Coffee"));
//! assert!(result.payees.contains("Coffee Shop"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod config;
mod date;
mod error;
pub mod header;
mod line_source;
mod number;
mod recognizer;
pub mod records;
mod result;

pub use assembler::{EntityAssembler, Placement};
pub use config::{ParserConfig, QifConfigBuilder, DEFAULT_OPENING_BALANCE_PAYEE};
pub use date::{parse_date, DateFormat, UnknownDateFormat};
pub use error::{ParseError, ParseErrorKind, RecordKind};
pub use line_source::{LineReader, LineSource};
pub use number::parse_amount;
pub use recognizer::{AccountId, QifParser};
pub use result::ParseResult;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse QIF source text.
pub fn parse(source: &str, config: &ParserConfig) -> Result<ParseResult, ParseError> {
    parse_reader(source.as_bytes(), config)
}

/// Parse QIF data from a buffered reader.
pub fn parse_reader<R: BufRead>(
    reader: R,
    config: &ParserConfig,
) -> Result<ParseResult, ParseError> {
    QifParser::new(LineReader::new(reader), config).parse()
}

/// Parse a QIF file.
///
/// Failure to open the file is reported as [`ParseErrorKind::Io`] at line 0.
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<ParseResult, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ParseError::new(ParseErrorKind::Io(e.to_string()), 0)
            .with_context(format!("opening {}", path.display()))
    })?;
    tracing::debug!("parsing {}", path.display());
    parse_reader(BufReader::new(file), config)
}
