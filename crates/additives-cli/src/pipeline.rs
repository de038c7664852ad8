//! The two batch pipelines.
//!
//! - [`run_eu_classifier`]: EU feed -> banned and high-risk CSVs
//! - [`run_reconciler`]: those CSVs plus the US registry -> comparison CSV
//!
//! Each stage runs inside its own span so structured logs can be grouped
//! by step.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use additives_classify::classify_with_threshold;
use additives_ingest::{
    load_banned_additives, load_eu_records, load_high_risk_additives, load_us_substances,
};
use additives_output::{
    WriteOutcome, ensure_output_dir, write_comparison_report, write_records,
};
use additives_reconcile::{build_indexes_with, match_and_classify_with};

use crate::config::PipelineConfig;

/// Result of one EU classifier run.
#[derive(Debug, Clone, PartialEq)]
pub struct EuSummary {
    /// Restriction records in the feed.
    pub records: usize,
    pub banned: WriteOutcome,
    pub high_risk: WriteOutcome,
}

/// Result of one reconciler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub us_substances: usize,
    pub banned_in_both: usize,
    pub banned_in_eu_only: usize,
    pub high_risk_in_eu: usize,
    /// EU banned entries with no US name match.
    pub unmatched_banned: usize,
    /// EU high-risk entries with no US-allowed name match.
    pub unmatched_high_risk: usize,
    pub output: WriteOutcome,
}

/// Derives the banned and high-risk lists from the EU feed and writes them.
///
/// An empty list produces no file.
pub fn run_eu_classifier(config: &PipelineConfig) -> Result<EuSummary> {
    let span = info_span!("eu_classifier");
    let _guard = span.enter();

    let feed = config.eu_feed_path();
    let records = info_span!("load")
        .in_scope(|| load_eu_records(&feed))
        .context("load EU restriction feed")?;

    let classification = info_span!("classify")
        .in_scope(|| classify_with_threshold(&records, config.high_risk_threshold))
        .context("classify EU restriction records")?;

    let (banned, high_risk) = info_span!("write").in_scope(|| -> Result<_> {
        ensure_output_dir(&config.eu_output_dir()).context("create EU output directory")?;
        let banned = write_records(&classification.banned, &config.banned_additives_path())
            .context("write EU banned additives")?;
        let high_risk =
            write_records(&classification.high_risk, &config.high_risk_additives_path())
                .context("write EU high-risk additives")?;
        Ok((banned, high_risk))
    })?;

    Ok(EuSummary {
        records: records.len(),
        banned,
        high_risk,
    })
}

/// Matches the EU lists against the US registry and writes the comparison.
///
/// Both EU lists must exist; run [`run_eu_classifier`] first.
pub fn run_reconciler(config: &PipelineConfig) -> Result<ComparisonSummary> {
    let span = info_span!("reconciler", normalization = %config.normalization);
    let _guard = span.enter();

    let (banned, high_risk, substances) = info_span!("load").in_scope(|| -> Result<_> {
        let banned = load_banned_additives(&config.banned_additives_path())
            .context("load EU banned additives")?;
        let high_risk = load_high_risk_additives(&config.high_risk_additives_path())
            .context("load EU high-risk additives")?;
        let substances = load_us_substances(&config.us_feed_path(), config.us_preamble_lines)
            .context("load US substance registry")?;
        Ok((banned, high_risk, substances))
    })?;

    let indexes =
        info_span!("index").in_scope(|| build_indexes_with(&substances, config.normalization));

    let report = info_span!("match").in_scope(|| {
        match_and_classify_with(&banned, &high_risk, &indexes, config.normalization)
    });

    if report.unmatched_banned > 0 || report.unmatched_high_risk > 0 {
        info!(
            unmatched_banned = report.unmatched_banned,
            unmatched_high_risk = report.unmatched_high_risk,
            "EU additives without a US match were left out of the comparison"
        );
    }
    if report.is_empty() {
        warn!("No EU additive matched a US substance");
    }

    let output = info_span!("write")
        .in_scope(|| write_comparison_report(&report, &config.comparison_path()))
        .context("write comparison report")?;

    info!(
        banned_in_both = report.banned_in_both.len(),
        banned_in_eu_only = report.banned_in_eu_only.len(),
        high_risk_in_eu = report.high_risk_in_eu.len(),
        "Comparison summary"
    );

    Ok(ComparisonSummary {
        us_substances: substances.len(),
        banned_in_both: report.banned_in_both.len(),
        banned_in_eu_only: report.banned_in_eu_only.len(),
        high_risk_in_eu: report.high_risk_in_eu.len(),
        unmatched_banned: report.unmatched_banned,
        unmatched_high_risk: report.unmatched_high_risk,
        output,
    })
}
