//! Error types shared by the iqtab reshaping tools.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating, or reshaping measurement tables.
#[derive(Debug, Error)]
pub enum IqtabError {
    // === File and CSV errors ===
    /// Failed to open or read the input file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse or write CSV content.
    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyTable { path: PathBuf },

    // === Schema validation errors ===
    /// One or more required columns are absent from the input header.
    #[error("input CSV must contain columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A key cell did not parse as an integer.
    #[error("column '{column}' row {row}: '{value}' is not an integer")]
    InvalidInteger {
        column: String,
        row: usize,
        value: String,
    },

    // === Consistency errors ===
    /// The same (Pulse, RangeBin) pair appeared more than once.
    #[error("duplicate entry for Pulse {pulse}, RangeBin {range_bin}")]
    DuplicateKey { pulse: i64, range_bin: i64 },

    /// The I and Q partitions have different row counts.
    #[error(
        "mismatch in number of I and Q rows ({i_rows} vs {q_rows}); input data is inconsistent"
    )]
    ComponentCountMismatch { i_rows: usize, q_rows: usize },

    /// The frequency sequences of the I and Q partitions diverge.
    #[error(
        "frequency rows for I and Q do not align at pair {row}: '{i_value}' vs '{q_value}'"
    )]
    FrequencyMismatch {
        row: usize,
        i_value: String,
        q_value: String,
    },
}

/// Result type for iqtab operations.
pub type Result<T> = std::result::Result<T, IqtabError>;
