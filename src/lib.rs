//! Expense Ledger - a personal expense tracker for the terminal
//!
//! This library provides the core functionality for the `expenses` binary:
//! recording expenses, persisting them to a CSV file, and listing and summing
//! them from an interactive menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Location of the persistent store
//! - `error`: Custom error types
//! - `models`: The expense record and its value types
//! - `storage`: CSV file storage and the record store
//! - `display`: Table and total formatting
//! - `shell`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::{Amount, ExpenseStore, LedgerPaths};
//!
//! let paths = LedgerPaths::with_data_file("expenses.csv");
//! let mut store = ExpenseStore::open(paths)?;
//! store.add("Coffee", Amount::parse("3.50")?, "2024-01-15")?;
//! println!("{}", store.total()?.to_fixed());
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod shell;
pub mod storage;

pub use config::LedgerPaths;
pub use error::{LedgerError, LedgerResult};
pub use models::{Amount, Expense, ExpenseId, NewExpense};
pub use shell::Shell;
pub use storage::ExpenseStore;
