//! Error types for EU classification.

use thiserror::Error;

/// A selected restriction record lacks a key its derived entry needs.
///
/// Records are only checked once their tag and level select them, so
/// unrestricted records never fail here.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("restriction record {index} ({e_code} {name}) has no '{field}' key")]
    MissingField {
        /// Position in the feed, from zero.
        index: usize,
        e_code: String,
        name: String,
        field: &'static str,
    },
}

/// Result type for classification.
pub type Result<T> = std::result::Result<T, ClassifyError>;
