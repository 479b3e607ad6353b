//! CSV reading and writing on top of the `csv` crate.
//!
//! Input files are read whole into a [`Table`]: cells are trimmed and
//! BOM-stripped, all-blank rows are dropped, the first surviving row becomes
//! the header, and data rows are padded to the header width.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use tracing::debug;

use iqtab_model::{IqtabError, Result, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`Table`].
///
/// # Errors
///
/// Returns [`IqtabError::Io`] when the file cannot be opened,
/// [`IqtabError::Csv`] on malformed CSV, and [`IqtabError::EmptyTable`] when
/// no header row survives normalization.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| IqtabError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IqtabError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut rows = raw_rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Err(IqtabError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let mut table = Table::new(headers);
    for record in rows {
        let mut row = Vec::with_capacity(table.width());
        for idx in 0..table.width() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Write a [`Table`] to a CSV file, truncating any existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path).map_err(|source| IqtabError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = Writer::from_writer(file);
    let csv_err = |source| IqtabError::Csv {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(&table.headers).map_err(csv_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| IqtabError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.rows.len(),
        "wrote csv table"
    );
    Ok(())
}
