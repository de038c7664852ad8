//! EU additive classification.
//!
//! Derives two lists from the EU restriction feed:
//!
//! - **Banned**: maximum-level rules with a permitted level of exactly zero
//! - **High risk**: maximum-level rules with a present level below
//!   [`HIGH_RISK_THRESHOLD`]
//!
//! A zero-level rule is in both lists. Levels are compared in each
//! record's own unit; units are not converted.
//!
//! Records without a restriction tag are skipped. A maximum-level record
//! without a `restriction_value` key, or a selected record without the
//! `restriction_unit`/`restriction_note` keys its entry needs, fails with
//! [`ClassifyError`].

mod classifier;
mod error;

pub use classifier::{
    Classification, HIGH_RISK_THRESHOLD, classify, classify_with_threshold, extract_banned,
    extract_high_risk, extract_high_risk_with_threshold,
};
pub use error::{ClassifyError, Result};
