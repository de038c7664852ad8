use additives_model::{BannedAdditive, EuRestrictionRecord, FeedValue, HighRiskAdditive};

use crate::error::{ClassifyError, Result};

/// Maximum levels strictly below this value count as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 50.0;

/// Both derived lists for one feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub banned: Vec<BannedAdditive>,
    pub high_risk: Vec<HighRiskAdditive>,
}

/// Keeps maximum-level records whose value is exactly zero, in input order.
pub fn extract_banned(records: &[EuRestrictionRecord]) -> Result<Vec<BannedAdditive>> {
    let mut banned = Vec::new();
    for (index, record) in maximum_level_records(records) {
        let value = require(index, record, "restriction_value", &record.restriction_value)?;
        if value == Some(&0.0) {
            require(index, record, "restriction_note", &record.restriction_note)?;
            banned.push(BannedAdditive::from(record));
        }
    }
    Ok(banned)
}

/// Keeps maximum-level records with a value below [`HIGH_RISK_THRESHOLD`].
pub fn extract_high_risk(records: &[EuRestrictionRecord]) -> Result<Vec<HighRiskAdditive>> {
    extract_high_risk_with_threshold(records, HIGH_RISK_THRESHOLD)
}

/// Keeps maximum-level records with a value below `threshold`, in input order.
///
/// Records with a `null` value never qualify.
pub fn extract_high_risk_with_threshold(
    records: &[EuRestrictionRecord],
    threshold: f64,
) -> Result<Vec<HighRiskAdditive>> {
    let mut high_risk = Vec::new();
    for (index, record) in maximum_level_records(records) {
        let value = require(index, record, "restriction_value", &record.restriction_value)?;
        if let Some(&level) = value
            && level < threshold
        {
            require(index, record, "restriction_unit", &record.restriction_unit)?;
            require(index, record, "restriction_note", &record.restriction_note)?;
            high_risk.push(HighRiskAdditive::from_record(record, level));
        }
    }
    Ok(high_risk)
}

/// Runs both extractions with the default threshold.
pub fn classify(records: &[EuRestrictionRecord]) -> Result<Classification> {
    classify_with_threshold(records, HIGH_RISK_THRESHOLD)
}

/// Runs both extractions.
pub fn classify_with_threshold(
    records: &[EuRestrictionRecord],
    threshold: f64,
) -> Result<Classification> {
    let classification = Classification {
        banned: extract_banned(records)?,
        high_risk: extract_high_risk_with_threshold(records, threshold)?,
    };

    let maximum_level = records.iter().filter(|r| r.is_maximum_level()).count();
    tracing::info!(
        records = records.len(),
        maximum_level,
        banned = classification.banned.len(),
        high_risk = classification.high_risk.len(),
        threshold,
        "Classified EU restriction records"
    );
    Ok(classification)
}

/// Maximum-level records with their feed positions.
fn maximum_level_records(
    records: &[EuRestrictionRecord],
) -> impl Iterator<Item = (usize, &EuRestrictionRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_maximum_level())
}

/// The value of a key that must be present, `null` allowed.
fn require<'a, T>(
    index: usize,
    record: &EuRestrictionRecord,
    field: &'static str,
    value: &'a FeedValue<T>,
) -> Result<Option<&'a T>> {
    if value.is_missing() {
        return Err(ClassifyError::MissingField {
            index,
            e_code: record.e_code.clone(),
            name: record.name.clone(),
            field,
        });
    }
    Ok(value.as_option())
}
