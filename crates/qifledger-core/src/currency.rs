//! Currency codes and their minor-unit precision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currencies without a minor unit.
const ZERO_DIGIT_CURRENCIES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "VND", "VUV",
    "XAF", "XOF", "XPF",
];

/// Currencies with three minor-unit digits.
const THREE_DIGIT_CURRENCIES: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Error returned when a currency code is not acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The code is not three ASCII letters.
    #[error("invalid currency code '{0}': expected three letters")]
    InvalidCode(String),
}

/// An ISO 4217 style currency: an upper-case code plus minor-unit digits.
///
/// ```
/// use qifledger_core::Currency;
///
/// let usd = Currency::new("usd").unwrap();
/// assert_eq!(usd.code(), "USD");
/// assert_eq!(usd.fraction_digits(), 2);
///
/// let yen = Currency::new("JPY").unwrap();
/// assert_eq!(yen.fraction_digits(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    fraction_digits: u32,
}

impl Currency {
    /// Create a currency from its code, deriving the minor-unit digits.
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        }
        let code = code.to_ascii_uppercase();
        let fraction_digits = if ZERO_DIGIT_CURRENCIES.contains(&code.as_str()) {
            0
        } else if THREE_DIGIT_CURRENCIES.contains(&code.as_str()) {
            3
        } else {
            2
        };
        Ok(Self {
            code,
            fraction_digits,
        })
    }

    /// Override the number of minor-unit digits.
    #[must_use]
    pub const fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// The upper-case currency code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of digits after the decimal separator.
    pub const fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            fraction_digits: 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_uppercases_code() {
        let eur = Currency::new(" eur ").unwrap();
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.fraction_digits(), 2);
    }

    #[test]
    fn test_currency_minor_units() {
        assert_eq!(Currency::new("KRW").unwrap().fraction_digits(), 0);
        assert_eq!(Currency::new("KWD").unwrap().fraction_digits(), 3);
        assert_eq!(Currency::new("GBP").unwrap().fraction_digits(), 2);
    }

    #[test]
    fn test_currency_override_digits() {
        let btc = Currency::new("XBT").unwrap().with_fraction_digits(8);
        assert_eq!(btc.fraction_digits(), 8);
    }

    #[test]
    fn test_currency_rejects_bad_codes() {
        assert_eq!(
            Currency::new("US"),
            Err(CurrencyError::InvalidCode("US".to_string()))
        );
        assert!(Currency::new("U5D").is_err());
        assert!("EURO".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_default_is_usd() {
        assert_eq!(Currency::default().code(), "USD");
        assert_eq!(Currency::default().to_string(), "USD");
    }
}
