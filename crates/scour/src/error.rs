//! Error types for the scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scour operations.
///
/// Every variant is fatal: the pipeline never retries and never writes
/// partial output.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading or accessing an input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed delimited content).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file, missing header, or no data rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A referenced column is absent from the table header.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Mean imputation requested on a column with no usable numeric values.
    #[error("Column '{0}' has no non-missing numeric values to average")]
    EmptyColumn(String),

    /// Error writing the output file.
    #[error("Write error for '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization/deserialization error (rule files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
