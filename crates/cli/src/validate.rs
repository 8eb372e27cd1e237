use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;

#[derive(Debug, PartialEq, Eq)]
pub enum Validation {
    Ok,
    HeaderMismatch { found: usize },
    RowMismatch { row: usize, found: usize },
}

/// Checks the header and every data row against the expected column count.
/// Stops at the first mismatch. Rows are numbered from 2; the header is
/// line 1.
pub fn validate_columns(path: &Path, expected_cols: usize) -> Result<Validation> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open CSV file {}", path.display()))?;
    // flexible so the width check below is ours, not the parser's
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.with_context(|| format!("invalid row in {}", path.display()))?,
        None => bail!("empty CSV file {}", path.display()),
    };
    if header.len() != expected_cols {
        return Ok(Validation::HeaderMismatch {
            found: header.len(),
        });
    }
    for (idx, record) in records.enumerate() {
        let record = record.with_context(|| format!("invalid row in {}", path.display()))?;
        if record.len() != expected_cols {
            return Ok(Validation::RowMismatch {
                row: idx + 2,
                found: record.len(),
            });
        }
    }
    Ok(Validation::Ok)
}

pub fn run(path: &Path, expected_cols: usize) -> Result<ExitCode> {
    match validate_columns(path, expected_cols)? {
        Validation::Ok => {
            println!("[OK] {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Validation::HeaderMismatch { found } => {
            println!(
                "[FAIL] {}: expected {} columns, found {}",
                path.display(),
                expected_cols,
                found
            );
            Ok(ExitCode::from(1))
        }
        Validation::RowMismatch { row, found } => {
            println!("[FAIL] {}: row {} has {} columns", path.display(), row, found);
            Ok(ExitCode::from(1))
        }
    }
}
