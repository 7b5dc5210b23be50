//! Dataset loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the launch dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0:?}")]
    MissingColumn(String),

    /// A row holds a value that cannot be interpreted
    #[error("Malformed row at line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// The file has a header but no data rows
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset operations
pub type LoadResult<T> = Result<T, LoadError>;
