//! US/EU comparison results.
//!
//! A comparison entry pairs an EU-derived additive with the US substance
//! its normalized name matched. Entries fall into three categories and are
//! reported in a fixed category order.

use serde::{Deserialize, Serialize};

use crate::numeric::format_numeric;

/// Regulatory comparison category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonCategory {
    /// Banned in the EU and prohibited in the US.
    BannedInBoth,
    /// Banned in the EU, allowed in the US.
    BannedInEuOnly,
    /// Low EU maximum level, allowed in the US.
    HighRiskInEu,
}

impl ComparisonCategory {
    /// Categories in report order.
    pub const fn all() -> &'static [ComparisonCategory] {
        &[Self::BannedInBoth, Self::BannedInEuOnly, Self::HighRiskInEu]
    }

    /// Label written to the `Category` column.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BannedInBoth => "Banned in both US and EU",
            Self::BannedInEuOnly => "Banned in EU only",
            Self::HighRiskInEu => "High risk in EU",
        }
    }
}

impl std::fmt::Display for ComparisonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// EU-side descriptive fields carried into the `Details` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonDetails {
    Banned {
        category: String,
        legislation: String,
    },
    HighRisk {
        category: String,
        max_level: f64,
        unit: String,
    },
}

impl std::fmt::Display for ComparisonDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Banned {
                category,
                legislation,
            } => write!(f, "EU Category: {category}, Legislation: {legislation}"),
            Self::HighRisk {
                category,
                max_level,
                unit,
            } => write!(
                f,
                "Category: {category}, Max Level: {} {unit}",
                format_numeric(*max_level)
            ),
        }
    }
}

/// One matched substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub category: ComparisonCategory,
    /// EU name as written in the EU-derived list (not normalized).
    pub name: String,
    /// Registry identifier of the matched US substance.
    pub us_cas: String,
    pub details: ComparisonDetails,
}

/// Result of matching both EU-derived lists against the US registry.
///
/// Each category preserves the order of its EU source list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonReport {
    pub banned_in_both: Vec<ComparisonEntry>,
    pub banned_in_eu_only: Vec<ComparisonEntry>,
    pub high_risk_in_eu: Vec<ComparisonEntry>,
    /// EU banned entries with no US match in either index.
    pub unmatched_banned: usize,
    /// EU high-risk entries with no match among US-allowed substances.
    pub unmatched_high_risk: usize,
}

impl ComparisonReport {
    /// Entries of one category.
    pub fn entries_for(&self, category: ComparisonCategory) -> &[ComparisonEntry] {
        match category {
            ComparisonCategory::BannedInBoth => &self.banned_in_both,
            ComparisonCategory::BannedInEuOnly => &self.banned_in_eu_only,
            ComparisonCategory::HighRiskInEu => &self.high_risk_in_eu,
        }
    }

    /// All entries in report order: banned in both, banned in EU only, high risk.
    pub fn entries(&self) -> impl Iterator<Item = &ComparisonEntry> {
        ComparisonCategory::all()
            .iter()
            .flat_map(|category| self.entries_for(*category).iter())
    }

    pub fn len(&self) -> usize {
        self.banned_in_both.len() + self.banned_in_eu_only.len() + self.high_risk_in_eu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: ComparisonCategory, name: &str) -> ComparisonEntry {
        ComparisonEntry {
            category,
            name: name.to_string(),
            us_cas: "0-00-0".to_string(),
            details: ComparisonDetails::Banned {
                category: "Beverages".to_string(),
                legislation: "Reg 1333/2008".to_string(),
            },
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(
            ComparisonCategory::BannedInBoth.label(),
            "Banned in both US and EU"
        );
        assert_eq!(ComparisonCategory::BannedInEuOnly.label(), "Banned in EU only");
        assert_eq!(ComparisonCategory::HighRiskInEu.label(), "High risk in EU");
    }

    #[test]
    fn test_details_text() {
        let banned = ComparisonDetails::Banned {
            category: "Beverages".to_string(),
            legislation: "Reg 1333/2008".to_string(),
        };
        assert_eq!(
            banned.to_string(),
            "EU Category: Beverages, Legislation: Reg 1333/2008"
        );

        let high_risk = ComparisonDetails::HighRisk {
            category: "Confectionery".to_string(),
            max_level: 25.0,
            unit: "mg/kg".to_string(),
        };
        assert_eq!(
            high_risk.to_string(),
            "Category: Confectionery, Max Level: 25 mg/kg"
        );
    }

    #[test]
    fn test_entries_in_category_order() {
        let report = ComparisonReport {
            banned_in_both: vec![entry(ComparisonCategory::BannedInBoth, "A")],
            banned_in_eu_only: vec![
                entry(ComparisonCategory::BannedInEuOnly, "B"),
                entry(ComparisonCategory::BannedInEuOnly, "C"),
            ],
            high_risk_in_eu: vec![entry(ComparisonCategory::HighRiskInEu, "D")],
            ..ComparisonReport::default()
        };

        let names: Vec<&str> = report.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(report.len(), 4);
        assert!(!report.is_empty());
    }
}
