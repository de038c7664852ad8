//! US/EU reconciliation by normalized name.
//!
//! The two registries share no stable identifier, so substances are joined
//! on names:
//!
//! 1. Every US substance contributes all of its name variants (primary
//!    name, `Other Names`, synonyms) after normalization
//! 2. Variants go into one of two indexes depending on the prohibition flag
//! 3. Each EU-derived entry is normalized and looked up by exact equality
//!
//! | EU list   | Prohibited index hit | Allowed index hit | Neither |
//! |-----------|----------------------|-------------------|---------|
//! | Banned    | banned in both       | banned in EU only | dropped |
//! | High risk | (not consulted)      | high risk in EU   | dropped |
//!
//! Dropped entries are counted in the report but produce no rows.

mod index;
mod matcher;
mod variants;

pub use index::{NameIndex, NameIndexes, build_indexes, build_indexes_with};
pub use matcher::{match_and_classify, match_and_classify_with};
pub use variants::{collect_name_variants, collect_name_variants_with};
