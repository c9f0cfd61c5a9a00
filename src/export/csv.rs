// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::LogRow;
use crate::models::log_row::HEADERS;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Write `rows` to `path` as CSV, creating the parent directory if missing.
/// The header is written explicitly, so an empty file still carries the six columns.
pub fn write_rows(path: &Path, rows: &[LogRow]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read a fixture file back. The header must match the six expected columns.
pub fn read_rows(path: &Path) -> AppResult<Vec<LogRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(HEADERS.iter().copied()) {
        return Err(AppError::InvalidRow(format!(
            "unexpected header in {}: {}",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        let row: LogRow = rec?;
        rows.push(row);
    }
    Ok(rows)
}
