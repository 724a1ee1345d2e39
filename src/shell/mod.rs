//! Interactive shell
//!
//! A menu loop that reads choices from an input stream and drives the
//! [`ExpenseStore`]. Bad amounts or dates send the user back to the menu and
//! never touch the store; every other error ends the loop.
//!
//! The shell is generic over its streams, so tests can run it against
//! in-memory buffers.

pub mod menu;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::display::{format_expense_table, format_total};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, NewExpense};
use crate::storage::ExpenseStore;

pub use menu::{MenuChoice, MENU_LINES};

/// The menu loop and its I/O streams
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the streams, mainly to inspect output in tests
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, store: &mut ExpenseStore) -> LedgerResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_expense(store)?,
                Some(MenuChoice::List) => self.list_expenses(store)?,
                Some(MenuChoice::Total) => self.show_total(store)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting application...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please select a valid option.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        for line in MENU_LINES {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Collect one expense and store it; invalid input is reported and dropped
    fn add_expense(&mut self, store: &mut ExpenseStore) -> LedgerResult<()> {
        let new_expense = match self.prompt_new_expense() {
            Ok(Some(new_expense)) => new_expense,
            Ok(None) => return Ok(()),
            Err(err) if err.is_validation() => {
                debug!(error = %err, "rejected expense input");
                writeln!(self.output, "{}", err)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        match store.add(new_expense.description, new_expense.amount, new_expense.date) {
            Ok(_) => writeln!(self.output, "Expense added successfully!")?,
            // Rejected before the store changed, so the menu can carry on.
            Err(err) if err.is_validation() || err.is_overflow() => {
                debug!(error = %err, "expense not added");
                writeln!(self.output, "{}", err)?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Ask for description, amount and date
    ///
    /// The amount is validated as soon as it is read, so a bad amount skips
    /// the date prompt. `Ok(None)` means input ended part way through.
    fn prompt_new_expense(&mut self) -> LedgerResult<Option<NewExpense>> {
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(None);
        };
        let amount = Amount::parse(&amount)?;
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        NewExpense::new(description, amount, &date).map(Some)
    }

    fn list_expenses(&mut self, store: &ExpenseStore) -> LedgerResult<()> {
        write!(self.output, "{}", format_expense_table(store.list()))?;
        Ok(())
    }

    fn show_total(&mut self, store: &ExpenseStore) -> LedgerResult<()> {
        match store.total() {
            Ok(total) => writeln!(self.output, "{}", format_total(total))?,
            Err(err) if err.is_overflow() => writeln!(self.output, "{}", err)?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Print `text` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| LedgerError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
