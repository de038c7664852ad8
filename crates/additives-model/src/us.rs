//! US substance registry records.

use serde::{Deserialize, Serialize};

/// Maximum number of synonym columns (`SYN01`..`SYN19`) in the US feed.
pub const MAX_SYNONYMS: usize = 19;

/// One registered substance from the US feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsSubstance {
    /// Primary substance name (`Substance`).
    pub substance: String,

    /// Free-text alternate names (`Other Names`), when the column exists.
    pub other_names: Option<String>,

    /// Raw synonym values in column order. Empty cells are kept as empty
    /// strings so positions line up with `SYN01`..`SYN19`.
    pub synonyms: Vec<String>,

    /// Registry identifier (`CAS Registry No. (or other ID)`).
    pub cas_number: String,

    /// Prohibition marker (`Reg prohibited189`).
    pub prohibited_flag: String,
}

impl UsSubstance {
    pub fn new(substance: impl Into<String>, cas_number: impl Into<String>) -> Self {
        Self {
            substance: substance.into(),
            cas_number: cas_number.into(),
            ..Self::default()
        }
    }

    /// Set the prohibition marker.
    #[must_use]
    pub fn with_prohibited_flag(mut self, flag: impl Into<String>) -> Self {
        self.prohibited_flag = flag.into();
        self
    }

    /// Set the `Other Names` field.
    #[must_use]
    pub fn with_other_names(mut self, other_names: impl Into<String>) -> Self {
        self.other_names = Some(other_names.into());
        self
    }

    /// Append a synonym.
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// A substance is prohibited when its marker has any non-blank content.
    pub fn is_prohibited(&self) -> bool {
        !self.prohibited_flag.trim().is_empty()
    }
}
