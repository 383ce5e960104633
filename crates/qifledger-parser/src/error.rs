//! Parse error types.

use crate::date::DateFormat;
use std::fmt;
use thiserror::Error;

/// The kind of record a reader was materializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// An `!Account` declaration.
    Account,
    /// A category declaration.
    Category,
    /// A transaction, including its splits.
    Transaction,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => f.write_str("account"),
            Self::Category => f.write_str("category"),
            Self::Transaction => f.write_str("transaction"),
        }
    }
}

/// A parse error with location information.
///
/// The first irrecoverable problem aborts the whole parse; there is no
/// partial result alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// 1-based physical line number where the error was detected.
    pub line: usize,
    /// Text of the offending line, when there is one.
    pub source_line: Option<String>,
    /// Optional context message.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            source_line: None,
            context: None,
        }
    }

    /// Attach the text of the offending line.
    #[must_use]
    pub fn with_source_line(mut self, text: impl Into<String>) -> Self {
        self.source_line = Some(text.into());
        self
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Get a numeric code for the error kind.
    #[must_use]
    pub const fn kind_code(&self) -> u32 {
        match &self.kind {
            ParseErrorKind::InvalidDate { .. } => 1,
            ParseErrorKind::InvalidAmount { .. } => 2,
            ParseErrorKind::UnexpectedEof { .. } => 3,
            ParseErrorKind::Io(_) => 4,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}", self.kind)
    }

    /// Get a short label for the error.
    #[must_use]
    pub const fn label(&self) -> &str {
        match &self.kind {
            ParseErrorKind::InvalidDate { .. } => "invalid date",
            ParseErrorKind::InvalidAmount { .. } => "invalid amount",
            ParseErrorKind::UnexpectedEof { .. } => "unexpected end of input",
            ParseErrorKind::Io(_) => "read error",
        }
    }

    /// Whether a field value could not be parsed, as opposed to a structural
    /// or I/O failure. Callers may retry field errors with another configuration.
    #[must_use]
    pub const fn is_field_error(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::InvalidDate { .. } | ParseErrorKind::InvalidAmount { .. }
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({ctx})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A date field did not match the configured day/month/year order.
    #[error("invalid date '{value}' for {format} date order")]
    InvalidDate {
        /// Raw field value.
        value: String,
        /// Order the field was read with.
        format: DateFormat,
    },
    /// A numeric field could not be read as an amount.
    #[error("invalid amount '{value}'")]
    InvalidAmount {
        /// Raw field value.
        value: String,
    },
    /// Input ended before a record's terminator.
    #[error("unexpected end of input inside {record} record")]
    UnexpectedEof {
        /// Record being read.
        record: RecordKind,
    },
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_date() -> ParseErrorKind {
        ParseErrorKind::InvalidDate {
            value: "13/45/2024".to_string(),
            format: DateFormat::Us,
        }
    }

    #[test]
    fn test_parse_error_new() {
        let err = ParseError::new(ParseErrorKind::Io("broken pipe".to_string()), 7);
        assert_eq!(err.line, 7);
        assert!(err.context.is_none());
        assert!(err.source_line.is_none());
    }

    #[test]
    fn test_parse_error_display_with_context() {
        let err = ParseError::new(invalid_date(), 12)
            .with_source_line("D13/45/2024")
            .with_context("field D");
        let display = format!("{err}");
        assert_eq!(
            display,
            "line 12: invalid date '13/45/2024' for US date order (field D)"
        );
        assert_eq!(err.source_line.as_deref(), Some("D13/45/2024"));
    }

    #[test]
    fn test_kind_codes_and_labels() {
        let kinds = [
            (invalid_date(), 1),
            (
                ParseErrorKind::InvalidAmount {
                    value: "abc".to_string(),
                },
                2,
            ),
            (
                ParseErrorKind::UnexpectedEof {
                    record: RecordKind::Transaction,
                },
                3,
            ),
            (ParseErrorKind::Io("closed".to_string()), 4),
        ];

        for (kind, expected_code) in kinds {
            let err = ParseError::new(kind, 1);
            assert_eq!(err.kind_code(), expected_code);
            assert!(!err.label().is_empty());
        }
    }

    #[test]
    fn test_error_messages() {
        let eof = ParseErrorKind::UnexpectedEof {
            record: RecordKind::Category,
        };
        assert_eq!(
            eof.to_string(),
            "unexpected end of input inside category record"
        );

        let amount = ParseErrorKind::InvalidAmount {
            value: "12x".to_string(),
        };
        assert_eq!(amount.to_string(), "invalid amount '12x'");
    }

    #[test]
    fn test_field_error_classification() {
        assert!(ParseError::new(invalid_date(), 1).is_field_error());
        let eof = ParseError::new(
            ParseErrorKind::UnexpectedEof {
                record: RecordKind::Account,
            },
            3,
        );
        assert!(!eof.is_field_error());
    }

    #[test]
    fn test_parse_error_is_error_trait() {
        let err = ParseError::new(ParseErrorKind::Io("x".to_string()), 1);
        let _: &dyn std::error::Error = &err;
    }
}
