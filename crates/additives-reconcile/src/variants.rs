use std::collections::BTreeSet;

use additives_model::UsSubstance;
use additives_normalization::{NormalizationMode, NormalizedName, normalize_name_with};

/// All normalized names a US substance is known by.
pub fn collect_name_variants(substance: &UsSubstance) -> BTreeSet<NormalizedName> {
    collect_name_variants_with(substance, NormalizationMode::default())
}

/// All normalized names a US substance is known by, under `mode`.
///
/// The primary name always contributes, even when empty. `Other Names` is
/// normalized as one string, and only when non-empty; likewise each synonym.
pub fn collect_name_variants_with(
    substance: &UsSubstance,
    mode: NormalizationMode,
) -> BTreeSet<NormalizedName> {
    let mut names = BTreeSet::new();
    names.insert(normalize_name_with(&substance.substance, mode));

    if let Some(other_names) = substance.other_names.as_deref()
        && !other_names.is_empty()
    {
        names.insert(normalize_name_with(other_names, mode));
    }

    for synonym in substance.synonyms.iter().filter(|s| !s.is_empty()) {
        names.insert(normalize_name_with(synonym, mode));
    }
    names
}
