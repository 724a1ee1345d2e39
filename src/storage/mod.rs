//! Storage layer for the expense ledger
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation, and the [`ExpenseStore`] that owns the in-memory record set.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, EXPENSE_COLUMNS};
pub use file_io::{read_csv, write_csv_atomic};
