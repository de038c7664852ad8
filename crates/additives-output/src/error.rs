//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV file could not be created or a row could not be serialized.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Buffered output could not be flushed to disk.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
