use std::collections::BTreeMap;

use additives_model::UsSubstance;
use additives_normalization::{NormalizationMode, NormalizedName};

use crate::variants::collect_name_variants_with;

/// Normalized name -> US substance lookup.
///
/// Inserting a name that is already present replaces the earlier substance
/// (last write wins), so the result depends on feed order when two
/// substances share a normalized name.
#[derive(Debug, Clone, Default)]
pub struct NameIndex<'a> {
    entries: BTreeMap<NormalizedName, &'a UsSubstance>,
    overwritten: usize,
}

impl<'a> NameIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning the substance it replaced.
    pub fn insert(
        &mut self,
        name: NormalizedName,
        substance: &'a UsSubstance,
    ) -> Option<&'a UsSubstance> {
        let previous = self.entries.insert(name, substance);
        if previous.is_some() {
            self.overwritten += 1;
        }
        previous
    }

    /// Exact lookup on a normalized name.
    pub fn get(&self, name: &str) -> Option<&'a UsSubstance> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of inserts that replaced an existing entry.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedName, &'a UsSubstance)> {
        self.entries.iter().map(|(name, substance)| (name, *substance))
    }
}

/// The two lookups the matcher consults.
#[derive(Debug, Clone, Default)]
pub struct NameIndexes<'a> {
    /// Names of substances whose prohibition flag is set.
    pub prohibited: NameIndex<'a>,
    /// Names of all other substances.
    pub allowed: NameIndex<'a>,
}

/// Builds both indexes with the default normalization mode.
pub fn build_indexes(substances: &[UsSubstance]) -> NameIndexes<'_> {
    build_indexes_with(substances, NormalizationMode::default())
}

/// Partitions substances by prohibition flag and indexes every name variant.
///
/// Substances are inserted in feed order.
pub fn build_indexes_with(substances: &[UsSubstance], mode: NormalizationMode) -> NameIndexes<'_> {
    let mut indexes = NameIndexes::default();

    for substance in substances {
        let index = if substance.is_prohibited() {
            &mut indexes.prohibited
        } else {
            &mut indexes.allowed
        };
        for name in collect_name_variants_with(substance, mode) {
            index.insert(name, substance);
        }
    }

    tracing::debug!(
        substances = substances.len(),
        prohibited_names = indexes.prohibited.len(),
        allowed_names = indexes.allowed.len(),
        prohibited_overwritten = indexes.prohibited.overwritten(),
        allowed_overwritten = indexes.allowed.overwritten(),
        mode = %mode,
        "Built US name indexes"
    );
    indexes
}
