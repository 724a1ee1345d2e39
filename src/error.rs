//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV errors that are not tied to a particular row
    #[error("CSV error: {0}")]
    Csv(String),

    /// A row of the persisted file could not be understood
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Rejected user input. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// A total or id no longer fits its type
    #[error("Overflow: {0}")]
    Overflow(String),
}

impl LedgerError {
    /// Create a validation error for an amount that is not a number
    pub fn invalid_amount() -> Self {
        Self::Validation("Invalid amount. Please enter a numerical value.".into())
    }

    /// Create a validation error for a date not in YYYY-MM-DD form
    pub fn invalid_date() -> Self {
        Self::Validation("Invalid date format. Please enter in YYYY-MM-DD format.".into())
    }

    /// Create a validation error for an amount that would push the total out of range
    pub fn amount_too_large() -> Self {
        Self::Validation("Amount too large. The total of all expenses would overflow.".into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Check if this is a parse error from the persisted file
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e.to_string()),
            csv::ErrorKind::Deserialize { err, .. } => Self::Parse {
                line,
                message: err.to_string(),
            },
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::Parse {
                line,
                message: format!("expected {} fields, found {}", expected_len, len),
            },
            csv::ErrorKind::Utf8 { err, .. } => Self::Parse {
                line,
                message: err.to_string(),
            },
            _ => Self::Csv(message),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
