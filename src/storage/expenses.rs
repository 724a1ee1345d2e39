//! Expense store backed by a CSV file
//!
//! Holds the full record set in memory for the lifetime of the process. The
//! file is read once by [`ExpenseStore::load`] and rewritten in full after
//! every addition.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense, ExpenseId};

use super::file_io::{read_csv, write_csv_atomic};

/// Header of the persisted file, in column order
pub const EXPENSE_COLUMNS: [&str; 4] = ["id", "description", "amount", "date"];

/// The record store: in-memory expenses plus their backing file
#[derive(Debug)]
pub struct ExpenseStore {
    paths: LedgerPaths,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store for the given location without touching disk
    pub fn new(paths: LedgerPaths) -> Self {
        Self {
            paths,
            expenses: Vec::new(),
        }
    }

    /// Create a store and load whatever the file currently holds
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        let mut store = Self::new(paths);
        store.load()?;
        Ok(store)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        self.paths.data_file()
    }

    /// Replace the in-memory records with the contents of the file
    ///
    /// A missing file yields an empty ledger. A malformed row aborts the load
    /// and leaves the current records untouched.
    pub fn load(&mut self) -> LedgerResult<()> {
        let expenses: Vec<Expense> = read_csv(self.paths.data_file()).map_err(|err| {
            warn!(path = %self.path().display(), error = %err, "failed to load expenses");
            err
        })?;

        debug!(path = %self.path().display(), count = expenses.len(), "loaded expenses");
        self.expenses = expenses;
        Ok(())
    }

    /// Rewrite the backing file from the in-memory records
    pub fn save(&self) -> LedgerResult<()> {
        self.paths.ensure_directories()?;
        write_csv_atomic(
            self.paths.data_file(),
            self.paths.temp_file(),
            &EXPENSE_COLUMNS,
            &self.expenses,
        )?;

        debug!(path = %self.path().display(), count = self.expenses.len(), "saved expenses");
        Ok(())
    }

    /// The id the next added expense will receive
    ///
    /// Fails with [`LedgerError::Overflow`] when the largest id on file is
    /// already `u64::MAX`.
    pub fn next_id(&self) -> LedgerResult<ExpenseId> {
        match self.expenses.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| LedgerError::Overflow(format!("no expense id follows {}", max))),
        }
    }

    /// Record a new expense and persist the ledger
    ///
    /// Nothing changes if no id is left or if the amount would push the total
    /// out of range ([`LedgerError::amount_too_large`]). Otherwise the record
    /// is appended before the file is written. If the write fails the record
    /// stays in memory and the error is returned.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: Amount,
        date: impl Into<String>,
    ) -> LedgerResult<Expense> {
        let id = self.next_id()?;
        if self.total()?.checked_add(amount).is_none() {
            return Err(LedgerError::amount_too_large());
        }

        let expense = Expense::new(id, description, amount, date);
        self.expenses.push(expense.clone());

        if let Err(err) = self.save() {
            warn!(id = %expense.id, error = %err, "expense kept in memory but not saved");
            return Err(err);
        }

        info!(id = %expense.id, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Iterate over all expenses in insertion order
    pub fn list(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Sum of all amounts in insertion order, zero for an empty ledger
    ///
    /// Only a hand-edited file can hold amounts whose sum overflows; that is
    /// reported as [`LedgerError::Overflow`].
    pub fn total(&self) -> LedgerResult<Amount> {
        Amount::checked_sum(self.expenses.iter().map(|e| e.amount))
            .ok_or_else(|| LedgerError::Overflow("total of all expenses is out of range".into()))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Count expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
