//! Food additive feed ingestion.
//!
//! This crate loads the three kinds of input the pipelines read:
//!
//! - **EU feed**: a JSON list of restriction records (UTF-8)
//! - **US feed**: a CSV registry behind a fixed non-tabular preamble
//!   (Windows-1252 / Latin-1)
//! - **EU-derived lists**: the banned and high-risk CSVs written by the
//!   EU classifier, read back by the reconciler
//!
//! Every loader is fail-fast: a missing file, an undecodable byte sequence,
//! a missing field or a ragged row aborts the whole load with an
//! [`IngestError`] naming the file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use additives_ingest::{load_eu_records, load_us_substances, US_PREAMBLE_LINES};
//!
//! let eu = load_eu_records(Path::new("data/raw/eu-food-additives/food_additives.json"))?;
//! let us = load_us_substances(
//!     Path::new("data/raw/us-food-additives/indirect-additives.csv"),
//!     US_PREAMBLE_LINES,
//! )?;
//! ```

mod derived;
mod encoding;
mod error;
mod eu;
pub mod schema;
mod us;

// === Error Types ===
pub use error::{IngestError, Result};

// === Text Decoding ===
pub use encoding::{SourceEncoding, read_text, skip_preamble};

// === Loaders ===
pub use derived::{load_banned_additives, load_high_risk_additives};
pub use eu::{load_eu_records, parse_eu_records};
pub use us::{US_PREAMBLE_LINES, load_us_substances, parse_us_substances};
