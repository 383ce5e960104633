//! Amount type representing a fixed-point number scoped to one currency.
//!
//! Every monetary field read from an interchange file (transaction totals,
//! split portions, opening balances, credit limits) is stored as an [`Amount`]:
//! a decimal already rescaled to the minor units of its [`Currency`], paired
//! with the currency code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use crate::currency::Currency;
use crate::intern::InternedStr;

/// An amount is a quantity paired with a currency code.
///
/// # Examples
///
/// ```
/// use qifledger_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let amount = Amount::new(dec!(100.00), "USD");
/// assert_eq!(amount.number, dec!(100.00));
/// assert_eq!(amount.currency, "USD");
///
/// let other = Amount::new(dec!(-25.50), "USD");
/// let sum = &amount + &other;
/// assert_eq!(sum.number, dec!(74.50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The decimal quantity
    pub number: Decimal,
    /// The currency code (e.g., "USD", "EUR", "JPY")
    pub currency: InternedStr,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<InternedStr>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }

    /// Create an amount in minor units of `currency`.
    ///
    /// The number is rescaled to exactly the currency's fraction digits, so
    /// `1.5` in USD becomes `1.50` and `1234.5` in JPY becomes `1235`.
    #[must_use]
    pub fn in_currency(number: Decimal, currency: &Currency) -> Self {
        let mut number = number;
        number.rescale(currency.fraction_digits());
        Self {
            number,
            currency: currency.code().into(),
        }
    }

    /// Create a zero amount with the given currency.
    #[must_use]
    pub fn zero(currency: impl Into<InternedStr>) -> Self {
        Self {
            number: Decimal::ZERO,
            currency: currency.into(),
        }
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Check if the amount is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.number.is_sign_positive() && !self.number.is_zero()
    }

    /// Check if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.number.is_sign_negative() && !self.number.is_zero()
    }

    /// Get the absolute value of this amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            number: self.number.abs(),
            currency: self.currency.clone(),
        }
    }

    /// Get the scale (number of decimal places) of this amount.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.number.scale()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

impl Add for &Amount {
    type Output = Amount;

    fn add(self, other: &Amount) -> Amount {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot add amounts with different currencies"
        );
        Amount {
            number: self.number + other.number,
            currency: self.currency.clone(),
        }
    }
}

impl Sub for &Amount {
    type Output = Amount;

    fn sub(self, other: &Amount) -> Amount {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot subtract amounts with different currencies"
        );
        Amount {
            number: self.number - other.number,
            currency: self.currency.clone(),
        }
    }
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount {
            number: -self.number,
            currency: self.currency.clone(),
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl AddAssign<&Self> for Amount {
    fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot add amounts with different currencies"
        );
        self.number += other.number;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new() {
        let amount = Amount::new(dec!(100.00), "USD");
        assert_eq!(amount.number, dec!(100.00));
        assert_eq!(amount.currency, "USD");
    }

    #[test]
    fn test_zero() {
        let amount = Amount::zero("EUR");
        assert!(amount.is_zero());
        assert!(!amount.is_negative());
        assert_eq!(amount.currency, "EUR");
    }

    #[test]
    fn test_is_positive_negative() {
        let pos = Amount::new(dec!(100), "USD");
        let neg = Amount::new(dec!(-100), "USD");

        assert!(pos.is_positive());
        assert!(!pos.is_negative());
        assert!(neg.is_negative());
        assert!(!neg.is_positive());
    }

    #[test]
    fn test_in_currency_pads_scale() {
        let usd = Currency::new("USD").unwrap();
        let amount = Amount::in_currency(dec!(1.5), &usd);
        assert_eq!(amount.scale(), 2);
        assert_eq!(amount.to_string(), "1.50 USD");
    }

    #[test]
    fn test_in_currency_zero_fraction_digits() {
        let jpy = Currency::new("JPY").unwrap();
        let amount = Amount::in_currency(dec!(1200), &jpy);
        assert_eq!(amount.scale(), 0);
        assert_eq!(amount.number, dec!(1200));
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(dec!(10.00), "USD");
        let b = Amount::new(dec!(2.50), "USD");
        assert_eq!((&a + &b).number, dec!(12.50));
        assert_eq!((&a - &b).number, dec!(7.50));
        assert_eq!((-a.clone()).number, dec!(-10.00));

        let mut acc = Amount::zero("USD");
        acc += &a;
        acc += &b;
        assert_eq!(acc.number, dec!(12.50));
    }

    #[test]
    fn test_abs() {
        let neg = Amount::new(dec!(-3.25), "EUR");
        assert_eq!(neg.abs().number, dec!(3.25));
    }
}
