//! Error types for feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input file.
///
/// All variants are fatal to the run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File bytes are not valid in the expected encoding.
    #[error("file {path} is not valid {encoding}")]
    InvalidEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// JSON is malformed or a record is missing a required field.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV is malformed, ragged, or a row is missing a required field.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// File ends before the fixed preamble does.
    #[error("expected {expected} preamble lines in {path}, found {found}")]
    TruncatedPreamble {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/raw/food_additives.json"),
        };
        assert_eq!(
            err.to_string(),
            "input file not found: /data/raw/food_additives.json"
        );

        let err = IngestError::MissingColumn {
            column: "Substance".to_string(),
            path: PathBuf::from("us.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'Substance' not found in us.csv"
        );
    }

    #[test]
    fn test_error_from_json_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = IngestError::JsonParse {
            path: PathBuf::from("eu.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
