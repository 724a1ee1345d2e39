//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `--file` command-line flag
//! 2. `EXPENSES_FILE` environment variable
//! 3. `expenses.csv` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// File name used when no location is configured
pub const DEFAULT_DATA_FILE: &str = "expenses.csv";

/// Manages the paths used by the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    /// The CSV file backing the record store
    data_file: PathBuf,
}

impl LedgerPaths {
    /// Create LedgerPaths pointing at the default file in the working directory
    pub fn new() -> Self {
        Self::with_data_file(DEFAULT_DATA_FILE)
    }

    /// Create LedgerPaths with a custom data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the CSV data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the scratch file used while rewriting the data file
    ///
    /// Lives in the same directory so the final rename stays on one filesystem.
    pub fn temp_file(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.data_file.with_file_name(name)
    }

    /// Ensure the directory holding the data file exists
    pub fn ensure_directories(&self) -> LedgerResult<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = LedgerPaths::new();
        assert_eq!(paths.data_file(), Path::new("expenses.csv"));
        assert_eq!(paths.temp_file(), PathBuf::from("expenses.csv.tmp"));
    }

    #[test]
    fn test_custom_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ledger.csv");
        let paths = LedgerPaths::with_data_file(&file);

        assert_eq!(paths.data_file(), file.as_path());
        assert_eq!(paths.temp_file(), temp_dir.path().join("ledger.csv.tmp"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths =
            LedgerPaths::with_data_file(temp_dir.path().join("nested").join("dir").join("e.csv"));

        paths.ensure_directories().unwrap();

        assert!(temp_dir.path().join("nested").join("dir").exists());
    }

    #[test]
    fn test_ensure_directories_bare_file_name() {
        // No parent component: nothing to create, nothing to fail.
        LedgerPaths::new().ensure_directories().unwrap();
    }
}
