//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses for terminal display.

pub mod expense;

pub use expense::{format_expense_row, format_expense_table, format_total};
