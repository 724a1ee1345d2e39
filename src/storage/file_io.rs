//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read every row of a headed CSV file, returning no rows if the file doesn't exist
///
/// Columns are matched by header name. The first row that fails to
/// deserialize aborts the read with [`LedgerError::Parse`].
pub fn read_csv<T, P>(path: P) -> LedgerResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Write a headed CSV file atomically (write to temp, then rename)
///
/// The header is always written, even for zero rows. The temp file sits next
/// to `path` so the rename never crosses filesystems.
pub fn write_csv_atomic<T, P, Q>(
    path: P,
    temp_path: Q,
    header: &[&str],
    rows: &[T],
) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = temp_path.as_ref();

    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let written = write_rows(&mut writer, header, rows).and_then(|()| {
        let mut file = writer
            .into_inner()
            .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e.error())))?;
        file.flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))?;
        // Sync to disk before rename
        file.sync_all()
            .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))
    });

    if let Err(err) = written {
        let _ = fs::remove_file(temp_path);
        return Err(err);
    }

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        LedgerError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn write_rows<W: Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    header: &[&str],
    rows: &[T],
) -> LedgerResult<()> {
    writer
        .write_record(header)
        .map_err(|e| LedgerError::Io(format!("Failed to write header: {}", e)))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| LedgerError::Io(format!("Failed to write row: {}", e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    const HEADER: [&str; 2] = ["name", "value"];

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow {
                name: "plain".to_string(),
                value: 1,
            },
            TestRow {
                name: "with, comma and \"quotes\"".to_string(),
                value: -2,
            },
        ]
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let data: Vec<TestRow> = read_csv(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic(&path, &temp_path, &HEADER, &rows()).unwrap();
        assert!(path.exists());

        let loaded: Vec<TestRow> = read_csv(&path).unwrap();
        assert_eq!(loaded, rows());
    }

    #[test]
    fn test_fields_with_delimiter_are_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic(&path, &temp_path, &HEADER, &rows()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "name,value\nplain,1\n\"with, comma and \"\"quotes\"\"\",-2\n"
        );
    }

    #[test]
    fn test_header_written_for_empty_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic::<TestRow, _, _>(&path, &temp_path, &HEADER, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic(&path, &temp_path, &HEADER, &rows()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic(&path, &temp_path, &HEADER, &rows()).unwrap();
        write_csv_atomic(&path, &temp_path, &HEADER, &rows()[..1]).unwrap();

        let loaded: Vec<TestRow> = read_csv(&path).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("test.csv");
        let temp_path = temp_dir.path().join("missing").join("test.csv.tmp");

        let err = write_csv_atomic(&path, &temp_path, &HEADER, &rows()).unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_read_reports_bad_row_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "name,value\nok,1\nbad,not-a-number\n").unwrap();

        let err = read_csv::<TestRow, _>(&path).unwrap_err();
        match err {
            LedgerError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "").unwrap();

        let data: Vec<TestRow> = read_csv(&path).unwrap();
        assert!(data.is_empty());
    }
}
