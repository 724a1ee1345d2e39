//! Configuration module for the expense ledger
//!
//! The only configurable value is the location of the persistent store. It is
//! resolved once in `main` and handed to the store explicitly.

pub mod paths;

pub use paths::LedgerPaths;
