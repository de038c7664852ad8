//! Pipeline configuration.
//!
//! Every path is relative to a data root: the current directory, or the
//! directory named by [`DATA_DIR_ENV_VAR`]. An optional TOML file overrides
//! any subset of the defaults:
//!
//! ```toml
//! high_risk_threshold = 50
//! us_preamble_lines = 4
//! normalization = "legacy"
//!
//! [paths]
//! eu_feed = "data/raw/eu-food-additives/food_additives.json"
//! eu_output_dir = "data/processed/eu-food-additives"
//! us_feed = "data/raw/us-food-additives/indirect-additives.csv"
//! comparison_output_dir = "data/processed/comparison"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use additives_classify::HIGH_RISK_THRESHOLD;
use additives_ingest::US_PREAMBLE_LINES;
use additives_normalization::NormalizationMode;
use additives_output::{BANNED_ADDITIVES_FILE, COMPARISON_FILE, HIGH_RISK_ADDITIVES_FILE};

/// Environment variable for overriding the data root.
pub const DATA_DIR_ENV_VAR: &str = "ADDITIVES_DATA_DIR";

/// Settings shared by both pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory the relative paths resolve against.
    #[serde(skip)]
    pub data_root: PathBuf,

    /// Maximum levels strictly below this are high risk.
    pub high_risk_threshold: f64,

    /// Non-tabular lines before the US registry header.
    pub us_preamble_lines: usize,

    /// Name normalization used for both index keys and lookups.
    pub normalization: NormalizationMode,

    pub paths: PathSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::new(),
            high_risk_threshold: HIGH_RISK_THRESHOLD,
            us_preamble_lines: US_PREAMBLE_LINES,
            normalization: NormalizationMode::default(),
            paths: PathSettings::default(),
        }
    }
}

/// Input and output locations, relative to the data root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub eu_feed: PathBuf,
    pub eu_output_dir: PathBuf,
    pub us_feed: PathBuf,
    pub comparison_output_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            eu_feed: PathBuf::from("data/raw/eu-food-additives/food_additives.json"),
            eu_output_dir: PathBuf::from("data/processed/eu-food-additives"),
            us_feed: PathBuf::from("data/raw/us-food-additives/indirect-additives.csv"),
            comparison_output_dir: PathBuf::from("data/processed/comparison"),
        }
    }
}

impl PipelineConfig {
    /// Builds the effective configuration.
    ///
    /// Starts from the defaults, or from `path` when given. The data root
    /// comes from [`DATA_DIR_ENV_VAR`] when set.
    ///
    /// # Errors
    ///
    /// Fails when an explicit config file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        Ok(config.with_data_root(data_root()))
    }

    /// Parses a TOML config file. The data root is left empty.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    #[must_use]
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = root.into();
        self
    }

    pub fn eu_feed_path(&self) -> PathBuf {
        self.data_root.join(&self.paths.eu_feed)
    }

    pub fn eu_output_dir(&self) -> PathBuf {
        self.data_root.join(&self.paths.eu_output_dir)
    }

    pub fn banned_additives_path(&self) -> PathBuf {
        self.eu_output_dir().join(BANNED_ADDITIVES_FILE)
    }

    pub fn high_risk_additives_path(&self) -> PathBuf {
        self.eu_output_dir().join(HIGH_RISK_ADDITIVES_FILE)
    }

    pub fn us_feed_path(&self) -> PathBuf {
        self.data_root.join(&self.paths.us_feed)
    }

    pub fn comparison_output_dir(&self) -> PathBuf {
        self.data_root.join(&self.paths.comparison_output_dir)
    }

    pub fn comparison_path(&self) -> PathBuf {
        self.comparison_output_dir().join(COMPARISON_FILE)
    }
}

/// Data root directory.
///
/// Resolution order:
/// 1. `ADDITIVES_DATA_DIR` environment variable
/// 2. the current directory
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::new()
}
