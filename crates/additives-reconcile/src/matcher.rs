use additives_model::{
    BannedAdditive, ComparisonCategory, ComparisonDetails, ComparisonEntry, ComparisonReport,
    HighRiskAdditive, UsSubstance,
};
use additives_normalization::{NormalizationMode, normalize_name_with};

use crate::index::NameIndexes;

/// Matches both EU lists against the US indexes with the default mode.
pub fn match_and_classify(
    banned: &[BannedAdditive],
    high_risk: &[HighRiskAdditive],
    indexes: &NameIndexes<'_>,
) -> ComparisonReport {
    match_and_classify_with(banned, high_risk, indexes, NormalizationMode::default())
}

/// Matches both EU lists against the US indexes.
///
/// `mode` must be the mode the indexes were built with.
pub fn match_and_classify_with(
    banned: &[BannedAdditive],
    high_risk: &[HighRiskAdditive],
    indexes: &NameIndexes<'_>,
    mode: NormalizationMode,
) -> ComparisonReport {
    let mut report = ComparisonReport::default();

    for additive in banned {
        let name = normalize_name_with(&additive.name, mode);
        let details = ComparisonDetails::Banned {
            category: additive.category.clone(),
            legislation: additive.legislation.clone(),
        };

        if let Some(substance) = indexes.prohibited.get(name.as_str()) {
            report.banned_in_both.push(entry(
                ComparisonCategory::BannedInBoth,
                &additive.name,
                substance,
                details,
            ));
        } else if let Some(substance) = indexes.allowed.get(name.as_str()) {
            report.banned_in_eu_only.push(entry(
                ComparisonCategory::BannedInEuOnly,
                &additive.name,
                substance,
                details,
            ));
        } else {
            tracing::trace!(name = %additive.name, normalized = %name, "No US match for banned additive");
            report.unmatched_banned += 1;
        }
    }

    for additive in high_risk {
        let name = normalize_name_with(&additive.name, mode);

        if let Some(substance) = indexes.allowed.get(name.as_str()) {
            let details = ComparisonDetails::HighRisk {
                category: additive.category.clone(),
                max_level: additive.max_level,
                unit: additive.unit.clone(),
            };
            report.high_risk_in_eu.push(entry(
                ComparisonCategory::HighRiskInEu,
                &additive.name,
                substance,
                details,
            ));
        } else {
            tracing::trace!(name = %additive.name, normalized = %name, "No US-allowed match for high-risk additive");
            report.unmatched_high_risk += 1;
        }
    }

    tracing::debug!(
        banned_in_both = report.banned_in_both.len(),
        banned_in_eu_only = report.banned_in_eu_only.len(),
        high_risk_in_eu = report.high_risk_in_eu.len(),
        unmatched_banned = report.unmatched_banned,
        unmatched_high_risk = report.unmatched_high_risk,
        "Matched EU additives against US registry"
    );
    report
}

fn entry(
    category: ComparisonCategory,
    eu_name: &str,
    substance: &UsSubstance,
    details: ComparisonDetails,
) -> ComparisonEntry {
    ComparisonEntry {
        category,
        name: eu_name.to_string(),
        us_cas: substance.cas_number.clone(),
        details,
    }
}
