//! Error types for dataset ingestion

use std::path::PathBuf;

/// Errors while loading a dataset
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// IO error opening the file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or missing required column
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A value failed validation
    #[error("row {row}, column '{column}': {message}")]
    InvalidValue {
        /// 1-based data row (header excluded)
        row: usize,
        /// Source column name
        column: &'static str,
        /// What was wrong
        message: String,
    },

    /// File has a header but no data rows
    #[error("dataset contains no rows")]
    Empty,
}

impl IngestError {
    /// Create invalid-value error
    pub fn invalid(row: usize, column: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            row,
            column,
            message: message.into(),
        }
    }
}
