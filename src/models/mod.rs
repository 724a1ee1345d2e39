//! Core data models for the expense ledger
//!
//! The ledger has a single entity, the [`Expense`], plus the small value
//! types it is built from.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::Amount;
pub use expense::{validate_date, Expense, NewExpense};
pub use ids::ExpenseId;
