//! CSV output generation.
//!
//! - [`write_records`]: one row per record, header taken from the record's
//!   field names; an empty list writes nothing
//! - [`write_comparison_report`]: the four-column US/EU comparison report
//!
//! Output directories are created on demand.

mod common;
mod comparison;
mod error;
mod records;

pub use common::{
    BANNED_ADDITIVES_FILE, COMPARISON_FILE, HIGH_RISK_ADDITIVES_FILE, WriteOutcome,
    ensure_output_dir,
};
pub use comparison::{COMPARISON_HEADER, write_comparison_report};
pub use error::{OutputError, Result};
pub use records::write_records;
