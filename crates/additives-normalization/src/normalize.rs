use crate::name::NormalizedName;
use crate::options::NormalizationMode;

/// Leading name variations removed during normalization, checked in order.
pub const PREFIXES: &[&str] = &["e ", "l-", "d-", "dl-", "alpha-", "beta-", "gamma-"];

/// Characters replaced by a space.
const SEPARATORS: &[char] = &['-', ',', '(', ')'];

/// Normalizes a raw substance name in [`NormalizationMode::Legacy`] mode.
///
/// Total over any input: empty or garbage input yields empty or garbage
/// output, never an error.
pub fn normalize_name(raw: &str) -> NormalizedName {
    normalize_name_with(raw, NormalizationMode::Legacy)
}

/// Normalizes a raw substance name with an explicit mode.
pub fn normalize_name_with(raw: &str, mode: NormalizationMode) -> NormalizedName {
    let value = match mode {
        NormalizationMode::Legacy => normalize_legacy(raw),
        NormalizationMode::Canonical => normalize_canonical(raw),
    };
    NormalizedName::new(value)
}

fn normalize_legacy(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = replace_separators(lowered.trim()).replace("  ", " ");

    let mut rest = collapsed.as_str();
    for prefix in PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
        }
    }
    rest.trim().to_string()
}

fn normalize_canonical(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();
    let rest = PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    replace_separators(rest)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn replace_separators(value: &str) -> String {
    value.replace(SEPARATORS, " ")
}
