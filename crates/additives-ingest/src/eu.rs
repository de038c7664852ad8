//! EU restriction feed loading.

use std::path::Path;

use additives_model::EuRestrictionRecord;

use crate::encoding::{SourceEncoding, read_text};
use crate::error::{IngestError, Result};

/// Loads the EU restriction feed (a JSON list of records).
///
/// A record missing one of the four descriptive keys fails the whole load.
/// The `restriction_*` keys may be absent; presence is enforced when a
/// record is classified.
pub fn load_eu_records(path: &Path) -> Result<Vec<EuRestrictionRecord>> {
    let text = read_text(path, SourceEncoding::Utf8)?;
    let records = parse_eu_records(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded EU restriction records"
    );
    Ok(records)
}

/// Parses EU restriction records from JSON text.
pub fn parse_eu_records(text: &str) -> serde_json::Result<Vec<EuRestrictionRecord>> {
    serde_json::from_str(text)
}
