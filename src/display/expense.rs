//! Expense display formatting
//!
//! Fixed-width table layout: ID 5, Description 20, Amount 10, Date 12 columns,
//! all left aligned. Amounts always show two decimals here, whatever precision
//! they were stored with.

use crate::models::{Amount, Expense};

/// Message shown instead of a table when there is nothing to list
pub const NO_EXPENSES: &str = "No expenses found.";

const RULE_WIDTH: usize = 47;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<5} {:<20} {:<10} {:<12}",
        expense.id,
        expense.description,
        expense.amount.to_fixed(),
        expense.date
    )
}

/// Format expenses as a table with header and rule
///
/// An empty input produces [`NO_EXPENSES`] rather than a header-only table.
pub fn format_expense_table<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut rows = expenses.into_iter().peekable();
    if rows.peek().is_none() {
        return format!("{}\n", NO_EXPENSES);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<20} {:<10} {:<12}\n",
        "ID", "Description", "Amount", "Date"
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    for expense in rows {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format the ledger total
pub fn format_total(total: Amount) -> String {
    format!("Total Expenses: {}", total.to_fixed())
}
