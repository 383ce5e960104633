//! Date field parsing with regional day/month/year orderings.
//!
//! Date fields are three numeric chunks separated by `/`, `-`, `.` or `'`.
//! Older exporters write years from 2000 on as two digits after an
//! apostrophe (`1/ 5'04`), so the apostrophe also decides the century.

use crate::error::ParseErrorKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Two-digit years below this pivot belong to the 2000s.
const CENTURY_PIVOT: u32 = 30;

/// Order of the day, month and year chunks in a date field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// Month, day, year (`12/31/2024`).
    #[default]
    Us,
    /// Day, month, year (`31/12/2024`).
    Eu,
    /// Year, month, day (`2024-12-31`).
    Ymd,
}

/// Error returned for an unknown date-format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format '{0}': expected us, eu or ymd")]
pub struct UnknownDateFormat(pub String);

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "mdy" => Ok(Self::Us),
            "eu" | "dmy" => Ok(Self::Eu),
            "ymd" | "iso" => Ok(Self::Ymd),
            _ => Err(UnknownDateFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => f.write_str("US"),
            Self::Eu => f.write_str("EU"),
            Self::Ymd => f.write_str("YMD"),
        }
    }
}

/// Parse a raw date field.
///
/// A leading four-digit chunk is always read as year-month-day, whatever the
/// configured order.
pub fn parse_date(raw: &str, format: DateFormat) -> Result<NaiveDate, ParseErrorKind> {
    let value = raw.trim();
    let invalid = || ParseErrorKind::InvalidDate {
        value: value.to_string(),
        format,
    };

    let mut chunks: Vec<&str> = Vec::with_capacity(3);
    let mut apostrophe_year = false;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        if matches!(c, '/' | '-' | '.' | '\'') {
            chunks.push(value[start..i].trim());
            if c == '\'' && chunks.len() == 2 {
                apostrophe_year = true;
            }
            start = i + c.len_utf8();
        }
    }
    chunks.push(value[start..].trim());

    if chunks.len() != 3
        || chunks
            .iter()
            .any(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let (year, month, day) = if chunks[0].len() == 4 {
        (chunks[0], chunks[1], chunks[2])
    } else {
        match format {
            DateFormat::Us => (chunks[2], chunks[0], chunks[1]),
            DateFormat::Eu => (chunks[2], chunks[1], chunks[0]),
            DateFormat::Ymd => (chunks[0], chunks[1], chunks[2]),
        }
    };

    let mut y: u32 = year.parse().map_err(|_| invalid())?;
    let m: u32 = month.parse().map_err(|_| invalid())?;
    let d: u32 = day.parse().map_err(|_| invalid())?;

    if year.len() <= 2 {
        y += if apostrophe_year || y < CENTURY_PIVOT {
            2000
        } else {
            1900
        };
    }

    let y = i32::try_from(y).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_us_order() {
        assert_eq!(parse_date("12/31/2024", DateFormat::Us), Ok(date(2024, 12, 31)));
        assert_eq!(parse_date(" 1/ 5/2024", DateFormat::Us), Ok(date(2024, 1, 5)));
    }

    #[test]
    fn test_eu_order() {
        assert_eq!(parse_date("31.12.2024", DateFormat::Eu), Ok(date(2024, 12, 31)));
        assert_eq!(parse_date("05/01/2024", DateFormat::Eu), Ok(date(2024, 1, 5)));
    }

    #[test]
    fn test_ymd_order() {
        assert_eq!(parse_date("2024-03-09", DateFormat::Ymd), Ok(date(2024, 3, 9)));
        assert_eq!(parse_date("24/03/09", DateFormat::Ymd), Ok(date(2024, 3, 9)));
    }

    #[test]
    fn test_four_digit_leading_year_wins() {
        assert_eq!(parse_date("2024-03-09", DateFormat::Us), Ok(date(2024, 3, 9)));
        assert_eq!(parse_date("2024-03-09", DateFormat::Eu), Ok(date(2024, 3, 9)));
    }

    #[test]
    fn test_apostrophe_year() {
        assert_eq!(parse_date("1/ 5'04", DateFormat::Us), Ok(date(2004, 1, 5)));
        assert_eq!(parse_date("12/25'99", DateFormat::Us), Ok(date(2099, 12, 25)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date("1/5/98", DateFormat::Us), Ok(date(1998, 1, 5)));
        assert_eq!(parse_date("1/5/12", DateFormat::Us), Ok(date(2012, 1, 5)));
    }

    #[test]
    fn test_invalid_dates() {
        for raw in ["", "2024", "1/2", "13/45/2024", "a/b/c", "1/2/3/4", "2/30/2024"] {
            let err = parse_date(raw, DateFormat::Us).unwrap_err();
            assert!(
                matches!(err, ParseErrorKind::InvalidDate { format: DateFormat::Us, .. }),
                "expected invalid date for {raw:?}"
            );
        }
    }

    #[test]
    fn test_date_format_from_str() {
        assert_eq!("US".parse::<DateFormat>(), Ok(DateFormat::Us));
        assert_eq!("dmy".parse::<DateFormat>(), Ok(DateFormat::Eu));
        assert_eq!("ymd".parse::<DateFormat>(), Ok(DateFormat::Ymd));
        assert_eq!(
            "julian".parse::<DateFormat>(),
            Err(UnknownDateFormat("julian".to_string()))
        );
    }
}
