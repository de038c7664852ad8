use serde::{Deserialize, Serialize};

/// How aggressively names are canonicalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    /// Single-pass double-space collapse; prefixes checked after hyphens
    /// are replaced, so only `"e "` can ever be stripped.
    #[default]
    Legacy,
    /// First matching prefix stripped before punctuation replacement;
    /// all whitespace runs collapsed.
    Canonical,
}

impl NormalizationMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Canonical => "canonical",
        }
    }
}

impl std::fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
