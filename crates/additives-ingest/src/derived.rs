//! Loading of the EU-derived lists written by the classifier.

use std::path::Path;

use serde::de::DeserializeOwned;

use additives_model::{BannedAdditive, HighRiskAdditive};

use crate::encoding::{SourceEncoding, read_text};
use crate::error::{IngestError, Result};

/// Loads `eu_banned_additives.csv`.
pub fn load_banned_additives(path: &Path) -> Result<Vec<BannedAdditive>> {
    let records = read_csv_records(path)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded EU banned additives"
    );
    Ok(records)
}

/// Loads `eu_high_risk_additives.csv`.
pub fn load_high_risk_additives(path: &Path) -> Result<Vec<HighRiskAdditive>> {
    let records = read_csv_records(path)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded EU high-risk additives"
    );
    Ok(records)
}

/// Deserializes every row of a headed UTF-8 CSV file.
fn read_csv_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = read_text(path, SourceEncoding::Utf8)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<T>()
        .map(|row| {
            row.map_err(|source| IngestError::CsvRead {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
