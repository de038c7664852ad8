//! EU food additive restriction records.
//!
//! The EU feed is a JSON list with one object per restriction rule. A rule
//! limits one additive in one food category:
//!
//! ```text
//! {
//!   "additive_e_code": "E 100",
//!   "additive_name": "Curcumin",
//!   "food_category": "Flavoured drinks",
//!   "legislation_short": "Reg 1333/2008",
//!   "restriction_type": "ML",
//!   "restriction_value": 100,
//!   "restriction_unit": "mg/l",
//!   "restriction_note": null
//! }
//! ```
//!
//! Records for additives with no restriction carry no `restriction_*` keys
//! at all. A record without `restriction_type` is never classified. The
//! other three keys are only required once a record is selected, which is
//! checked by the classifier, so [`FeedValue`] keeps "absent" apart from
//! `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numeric::serialize_numeric;

/// Kind of restriction a rule imposes.
///
/// Only maximum-level rules take part in classification. The feed tags them
/// `ML`; the long form `maximum-level` is accepted as the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RestrictionType {
    /// Maximum permitted level (`ML`).
    MaximumLevel,
    /// Any other restriction tag, kept verbatim.
    Other(String),
}

impl RestrictionType {
    /// Tag used by the EU feed for maximum-level restrictions.
    pub const MAXIMUM_LEVEL_TAG: &'static str = "ML";

    /// Long-form alias of [`Self::MAXIMUM_LEVEL_TAG`].
    pub const MAXIMUM_LEVEL_ALIAS: &'static str = "maximum-level";

    /// Returns the tag as it appears in the feed.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MaximumLevel => Self::MAXIMUM_LEVEL_TAG,
            Self::Other(tag) => tag,
        }
    }

    pub fn is_maximum_level(&self) -> bool {
        matches!(self, Self::MaximumLevel)
    }
}

impl From<String> for RestrictionType {
    fn from(tag: String) -> Self {
        if tag == Self::MAXIMUM_LEVEL_TAG || tag == Self::MAXIMUM_LEVEL_ALIAS {
            Self::MaximumLevel
        } else {
            Self::Other(tag)
        }
    }
}

impl From<&str> for RestrictionType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<RestrictionType> for String {
    fn from(value: RestrictionType) -> Self {
        match value {
            RestrictionType::MaximumLevel => RestrictionType::MAXIMUM_LEVEL_TAG.to_string(),
            RestrictionType::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for RestrictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One restriction rule from the EU feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuRestrictionRecord {
    /// E-number (e.g., "E 100").
    #[serde(rename = "additive_e_code")]
    pub e_code: String,

    /// Additive name (e.g., "Curcumin").
    #[serde(rename = "additive_name")]
    pub name: String,

    /// Food category the rule applies to.
    pub food_category: String,

    /// Short legislation reference (e.g., "Reg 1333/2008").
    #[serde(rename = "legislation_short")]
    pub legislation: String,

    /// Restriction tag. `None` when the key is absent or `null`.
    #[serde(default)]
    pub restriction_type: Option<RestrictionType>,

    /// Permitted level in `restriction_unit`. Units differ between records.
    #[serde(default, skip_serializing_if = "FeedValue::is_missing")]
    pub restriction_value: FeedValue<f64>,

    #[serde(default, skip_serializing_if = "FeedValue::is_missing")]
    pub restriction_unit: FeedValue<String>,

    #[serde(default, skip_serializing_if = "FeedValue::is_missing")]
    pub restriction_note: FeedValue<String>,
}

impl EuRestrictionRecord {
    /// True for maximum-level rules.
    pub fn is_maximum_level(&self) -> bool {
        self.restriction_type
            .as_ref()
            .is_some_and(RestrictionType::is_maximum_level)
    }
}

/// A nullable feed value whose key may also be absent.
///
/// Use with `#[serde(default)]` so an absent key becomes [`FeedValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedValue<T> {
    /// Key absent from the record.
    #[default]
    Missing,
    /// Key present with `null`.
    Null,
    Present(T),
}

impl<T> FeedValue<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value, if set.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for FeedValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FeedValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Serialize for FeedValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

/// An additive banned outright in one food category (maximum level of zero).
///
/// Field order is the column order of `eu_banned_additives.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannedAdditive {
    pub e_code: String,
    pub name: String,
    pub category: String,
    pub legislation: String,
    pub note: String,
}

impl From<&EuRestrictionRecord> for BannedAdditive {
    fn from(record: &EuRestrictionRecord) -> Self {
        Self {
            e_code: record.e_code.clone(),
            name: record.name.clone(),
            category: record.food_category.clone(),
            legislation: record.legislation.clone(),
            note: record.restriction_note.as_option().cloned().unwrap_or_default(),
        }
    }
}

/// An additive permitted only at a low maximum level.
///
/// Field order is the column order of `eu_high_risk_additives.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskAdditive {
    pub e_code: String,
    pub name: String,
    #[serde(serialize_with = "serialize_numeric")]
    pub max_level: f64,
    pub unit: String,
    pub category: String,
    pub note: String,
}

impl HighRiskAdditive {
    /// Builds a high-risk entry from a record and its (already checked) level.
    pub fn from_record(record: &EuRestrictionRecord, max_level: f64) -> Self {
        Self {
            e_code: record.e_code.clone(),
            name: record.name.clone(),
            max_level,
            unit: record.restriction_unit.as_option().cloned().unwrap_or_default(),
            category: record.food_category.clone(),
            note: record.restriction_note.as_option().cloned().unwrap_or_default(),
        }
    }
}
