//! Configuration for a parse.

use crate::date::DateFormat;
use qifledger_core::Currency;

/// Payee that marks the record carrying an account's starting balance.
pub const DEFAULT_OPENING_BALANCE_PAYEE: &str = "Opening Balance";

/// Settings a parse needs that the file itself does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Order of the chunks in date fields.
    pub date_format: DateFormat,
    /// Currency every amount is read in.
    pub currency: Currency,
    /// Payee of opening-balance records, compared ASCII case-insensitively.
    pub opening_balance_payee: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::Us,
            currency: Currency::default(),
            opening_balance_payee: DEFAULT_OPENING_BALANCE_PAYEE.to_string(),
        }
    }
}

impl ParserConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> QifConfigBuilder {
        QifConfigBuilder::new()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct QifConfigBuilder {
    config: ParserConfig,
}

impl QifConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date order.
    #[must_use]
    pub fn date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// Set the currency for amounts.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.config.currency = currency;
        self
    }

    /// Set the payee that marks opening-balance records.
    #[must_use]
    pub fn opening_balance_payee(mut self, payee: impl Into<String>) -> Self {
        self.config.opening_balance_payee = payee.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.date_format, DateFormat::Us);
        assert_eq!(config.currency.code(), "USD");
        assert_eq!(config.opening_balance_payee, "Opening Balance");
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::builder()
            .date_format(DateFormat::Eu)
            .currency(Currency::new("eur").unwrap())
            .opening_balance_payee("Anfangssaldo")
            .build();
        assert_eq!(config.date_format, DateFormat::Eu);
        assert_eq!(config.currency.code(), "EUR");
        assert_eq!(config.opening_balance_payee, "Anfangssaldo");
    }
}
