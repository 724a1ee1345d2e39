//! Expense model
//!
//! An expense is one row of the ledger: an id handed out by the store, a free
//! text description, an amount and a calendar date kept as text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;
use crate::error::{LedgerError, LedgerResult};

/// Format accepted for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
///
/// Field order matches the column order of the persisted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// How much was spent
    pub amount: Amount,

    /// Date as entered, `YYYY-MM-DD`. Not re-validated when loaded.
    pub date: String,
}

impl Expense {
    /// Create an expense with an already assigned id
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Amount,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date: date.into(),
        }
    }
}

/// Validated input for a new expense, not yet given an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Amount,
    pub date: String,
}

impl NewExpense {
    /// Build the input from an already parsed amount, validating the date
    pub fn new(description: impl Into<String>, amount: Amount, date: &str) -> LedgerResult<Self> {
        Ok(Self {
            description: description.into(),
            amount,
            date: validate_date(date)?,
        })
    }
}

/// Check that `date` is a real calendar date written as `YYYY-MM-DD`
///
/// Returns the text unchanged on success.
pub fn validate_date(date: &str) -> LedgerResult<String> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| date.to_string())
        .map_err(|_| LedgerError::invalid_date())
}
