//! Identifier type for expense records
//!
//! Ids are small positive integers handed out by the store, so the newtype
//! mainly keeps them from being confused with other counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first record of an empty ledger
    pub const FIRST: Self = Self(1);

    /// Create an ID from a raw value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The id that follows this one, `None` once the integer range is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags reach the integer.
        fmt::Display::fmt(&self.0, f)
    }
}
