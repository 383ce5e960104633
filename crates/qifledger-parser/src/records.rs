//! Record readers for accounts, categories and transactions.
//!
//! Each record is a run of tag-prefixed lines closed by a `^` line. All three
//! readers share one field loop; they differ only in how they interpret tags.

use crate::config::ParserConfig;
use crate::date::parse_date;
use crate::error::{ParseError, ParseErrorKind, RecordKind};
use crate::header::is_header;
use crate::line_source::LineSource;
use crate::number::parse_amount;
use qifledger_core::{Account, Amount, Category, ClearedStatus, Decimal, Split, Transaction};
use std::str::FromStr;

/// Line that closes a record.
const TERMINATOR: char = '^';

/// The parts of an `L` or `S` field: `Category/Class` or `[Account]/Class`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRef {
    /// Category name, when the field does not name an account.
    pub category: Option<String>,
    /// Class after the `/`.
    pub class: Option<String>,
    /// Account named in brackets.
    pub transfer: Option<String>,
}

impl CategoryRef {
    /// Split a category field into its parts. Empty parts are dropped.
    pub fn parse(value: &str) -> Self {
        let (target, class) = match value.split_once('/') {
            Some((target, class)) => (target.trim(), non_empty(class)),
            None => (value.trim(), None),
        };
        let transfer = target
            .strip_prefix('[')
            .map(|rest| rest.strip_suffix(']').unwrap_or(rest))
            .and_then(non_empty);
        let category = if target.starts_with('[') {
            None
        } else {
            non_empty(target)
        };
        Self {
            category,
            class,
            transfer,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Read the fields of one record, handing each `(tag, value)` to `on_field`.
///
/// The `^` terminator is consumed. A header line ends the record early and is
/// left for the caller. End of input before either is an error.
fn read_fields<S, F>(lines: &mut S, record: RecordKind, mut on_field: F) -> Result<(), ParseError>
where
    S: LineSource + ?Sized,
    F: FnMut(char, &str) -> Result<(), ParseErrorKind>,
{
    loop {
        let last = lines.line_number();
        match lines.peek_line()? {
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof { record },
                    last,
                ));
            }
            Some(line) if is_header(line) => {
                tracing::warn!(
                    after_line = last,
                    header = line,
                    "{record} record ended by a header instead of '^'"
                );
                return Ok(());
            }
            Some(_) => {}
        }

        let Some(line) = lines.read_line()? else {
            continue;
        };
        let mut chars = line.chars();
        let Some(tag) = chars.next() else {
            continue;
        };
        if tag == TERMINATOR {
            return Ok(());
        }
        on_field(tag, chars.as_str()).map_err(|kind| {
            ParseError::new(kind, lines.line_number())
                .with_source_line(line.as_str())
                .with_context(format!("{record} field '{tag}'"))
        })?;
    }
}

/// Read one `!Account` declaration.
///
/// Tags: `N` name, `T` type, `D` description, `L` credit limit.
pub fn read_account<S: LineSource + ?Sized>(
    lines: &mut S,
    config: &ParserConfig,
) -> Result<Account, ParseError> {
    let mut account = Account::anonymous();
    read_fields(lines, RecordKind::Account, |tag, value| {
        match tag {
            'N' => account.name = value.trim().to_string(),
            'T' => account.account_type = value.trim().to_string(),
            'D' => account.memo = non_empty(value),
            'L' => {
                if !value.trim().is_empty() {
                    account.credit_limit = Some(parse_amount(value, &config.currency)?);
                }
            }
            _ => {}
        }
        Ok(())
    })?;
    Ok(account)
}

/// Read one category declaration.
///
/// Tags: `N` name, `D` description, `I` income, `E` expense, `T` tax related.
pub fn read_category<S: LineSource + ?Sized>(lines: &mut S) -> Result<Category, ParseError> {
    let mut category = Category::explicit(String::new());
    read_fields(lines, RecordKind::Category, |tag, value| {
        match tag {
            'N' => category.name = value.trim().to_string(),
            'D' => category.description = non_empty(value),
            'I' => category.income = true,
            'E' => category.income = false,
            'T' => category.tax_related = true,
            _ => {}
        }
        Ok(())
    })?;
    Ok(category)
}

/// Read one transaction, including its splits.
///
/// Tags: `D` date, `T` amount (`U` when `T` is absent), `P` payee, `M` memo,
/// `N` number, `C` cleared status, `A` address line, `L` category, and the
/// split tags `S` category, `$` amount, `E` memo, `%` percentage.
pub fn read_transaction<S: LineSource + ?Sized>(
    lines: &mut S,
    config: &ParserConfig,
) -> Result<Transaction, ParseError> {
    let currency = &config.currency;
    let mut txn = Transaction::new(Amount::in_currency(Decimal::ZERO, currency));
    let mut has_total = false;
    let mut split: Option<Split> = None;

    read_fields(lines, RecordKind::Transaction, |tag, value| {
        match tag {
            'D' => txn.date = Some(parse_date(value, config.date_format)?),
            'T' => {
                txn.amount = parse_amount(value, currency)?;
                has_total = true;
            }
            'U' if !has_total => txn.amount = parse_amount(value, currency)?,
            'P' => txn.payee = non_empty(value),
            'M' => txn.memo = non_empty(value),
            'N' => txn.number = non_empty(value),
            'C' => txn.status = ClearedStatus::from_field(value),
            'A' => {
                if let Some(line) = non_empty(value) {
                    txn.address.push(line);
                }
            }
            'L' => {
                let target = CategoryRef::parse(value);
                txn.category = target.category;
                txn.class = target.class;
                txn.to_account = target.transfer;
            }
            'S' => {
                txn.splits.extend(split.take());
                let target = CategoryRef::parse(value);
                let mut next = Split::new(Amount::in_currency(Decimal::ZERO, currency));
                next.category = target.category;
                next.class = target.class;
                next.to_account = target.transfer;
                split = Some(next);
            }
            '$' => {
                split
                    .get_or_insert_with(|| {
                        Split::new(Amount::in_currency(Decimal::ZERO, currency))
                    })
                    .amount = parse_amount(value, currency)?;
            }
            'E' => {
                if let Some(split) = split.as_mut() {
                    split.memo = non_empty(value);
                }
            }
            '%' => {
                if let Some(split) = split.as_mut() {
                    split.percentage = Some(parse_percentage(value)?);
                }
            }
            _ => {}
        }
        Ok(())
    })?;

    txn.splits.extend(split);
    Ok(txn)
}

fn parse_percentage(value: &str) -> Result<Decimal, ParseErrorKind> {
    let trimmed = value.trim().trim_end_matches('%').trim();
    Decimal::from_str(trimmed).map_err(|_| ParseErrorKind::InvalidAmount {
        value: value.trim().to_string(),
    })
}
