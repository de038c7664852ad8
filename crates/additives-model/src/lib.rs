//! Data model for the food additive regulatory pipelines.
//!
//! # Module Organization
//!
//! - [`eu`]: EU restriction records and the two lists derived from them
//! - [`us`]: US substance registry records
//! - [`comparison`]: Cross-jurisdiction comparison results
//! - [`numeric`]: Numeric rendering shared by the CSV outputs
//!
//! Every type here is plain data. Loading lives in `additives-ingest`,
//! filtering in `additives-classify` and matching in `additives-reconcile`.

pub mod comparison;
pub mod eu;
pub mod numeric;
pub mod us;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use comparison::{ComparisonCategory, ComparisonDetails, ComparisonEntry, ComparisonReport};
pub use eu::{BannedAdditive, EuRestrictionRecord, FeedValue, HighRiskAdditive, RestrictionType};
pub use numeric::format_numeric;
pub use us::{MAX_SYNONYMS, UsSubstance};
