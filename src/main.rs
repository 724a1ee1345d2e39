use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use expense_ledger::{ExpenseStore, LedgerPaths, Shell};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Records expenses (description, amount, date) in a CSV file and \
                  lists or totals them from an interactive menu."
)]
struct Cli {
    /// CSV file holding the expenses
    #[arg(short, long, env = "EXPENSES_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, env = "EXPENSES_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("expense_ledger={level},expenses={level}", level = cli.log_level))
        .with_writer(io::stderr)
        .init();

    let paths = cli
        .file
        .map(LedgerPaths::with_data_file)
        .unwrap_or_default();

    let mut store = ExpenseStore::open(paths.clone())
        .with_context(|| format!("Failed to load {}", paths.data_file().display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(&mut store)?;

    Ok(())
}
