//! Amount field parsing.
//!
//! Amounts are written in whatever locale the exporting program used, so both
//! `1,234.56` and `1.234,56` occur. The last separator is taken as the decimal
//! separator unless that separator repeats with no other kind present, in
//! which case every separator is a grouping mark (`1.234.567`).

use crate::error::ParseErrorKind;
use qifledger_core::{Amount, Currency};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a raw amount field into an amount in minor units of `currency`.
///
/// An empty field is zero. Whitespace, apostrophes, `+` and currency symbols
/// are ignored; letters are rejected.
pub fn parse_amount(raw: &str, currency: &Currency) -> Result<Amount, ParseErrorKind> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(Amount::in_currency(Decimal::ZERO, currency));
    }
    let invalid = || ParseErrorKind::InvalidAmount {
        value: value.to_string(),
    };

    let mut digits = String::with_capacity(value.len());
    let mut negative = false;
    let mut last_separator: Option<(usize, char)> = None;
    let mut dots = 0usize;
    let mut commas = 0usize;

    for c in value.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' | ',' => {
                if c == '.' {
                    dots += 1;
                } else {
                    commas += 1;
                }
                last_separator = Some((digits.len(), c));
            }
            '-' => {
                if negative {
                    return Err(invalid());
                }
                negative = true;
            }
            c if c.is_ascii_alphabetic() => return Err(invalid()),
            _ => {}
        }
    }

    if digits.is_empty() {
        return Err(invalid());
    }

    let decimal_at = last_separator.and_then(|(pos, sep)| {
        let repeated = if sep == '.' { dots > 1 } else { commas > 1 };
        let mixed = dots > 0 && commas > 0;
        (mixed || !repeated).then_some(pos)
    });

    let mut normalized = String::with_capacity(digits.len() + 2);
    if negative {
        normalized.push('-');
    }
    match decimal_at {
        Some(pos) => {
            let (int, frac) = digits.split_at(pos);
            normalized.push_str(if int.is_empty() { "0" } else { int });
            if !frac.is_empty() {
                normalized.push('.');
                normalized.push_str(frac);
            }
        }
        None => normalized.push_str(&digits),
    }

    let number = Decimal::from_str(&normalized).map_err(|_| invalid())?;
    Ok(Amount::in_currency(number, currency))
}
