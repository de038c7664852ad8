//! Shared output constants and helpers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// EU classifier output: additives with a maximum level of zero.
pub const BANNED_ADDITIVES_FILE: &str = "eu_banned_additives.csv";

/// EU classifier output: additives with a low maximum level.
pub const HIGH_RISK_ADDITIVES_FILE: &str = "eu_high_risk_additives.csv";

/// Reconciler output.
pub const COMPARISON_FILE: &str = "us_eu_comparison.csv";

/// What a write call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File written with this many data rows.
    Written { path: PathBuf, rows: usize },
    /// Nothing to write; no file was created.
    Skipped { path: PathBuf },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. } | Self::Skipped { path } => path,
        }
    }

    /// Data rows written (zero when skipped).
    pub fn rows(&self) -> usize {
        match self {
            Self::Written { rows, .. } => *rows,
            Self::Skipped { .. } => 0,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Ensure an output directory exists and return it.
pub fn ensure_output_dir(dir: &Path) -> Result<&Path> {
    fs::create_dir_all(dir).map_err(|source| OutputError::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir)
}

/// Ensure the parent directory of a file path exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_output_dir(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_output_dir_nested() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("processed").join("comparison");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Existing directory is not an error
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_outcome_accessors() {
        let written = WriteOutcome::Written {
            path: PathBuf::from("a.csv"),
            rows: 3,
        };
        assert!(written.is_written());
        assert_eq!(written.rows(), 3);

        let skipped = WriteOutcome::Skipped {
            path: PathBuf::from("b.csv"),
        };
        assert!(!skipped.is_written());
        assert_eq!(skipped.rows(), 0);
        assert_eq!(skipped.path(), Path::new("b.csv"));
    }
}
