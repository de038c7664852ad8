//! Column names of the tabular feeds.

/// US substance registry columns.
pub mod us {
    pub const SUBSTANCE: &str = "Substance";
    pub const OTHER_NAMES: &str = "Other Names";
    pub const CAS_NUMBER: &str = "CAS Registry No. (or other ID)";
    pub const PROHIBITED: &str = "Reg prohibited189";

    /// Columns whose absence fails the load.
    pub const REQUIRED: &[&str] = &[SUBSTANCE, CAS_NUMBER, PROHIBITED];

    /// Synonym column name for a 1-based index (`SYN01`..`SYN19`).
    pub fn synonym(index: usize) -> String {
        format!("SYN{index:02}")
    }
}
