//! US/EU comparison report writer.

use std::path::Path;

use additives_model::ComparisonReport;

use crate::common::{WriteOutcome, ensure_parent_dir};
use crate::error::{OutputError, Result};
use crate::records::csv_writer;

/// Fixed header of the comparison report.
pub const COMPARISON_HEADER: [&str; 4] = ["Category", "Substance Name", "US CAS Number", "Details"];

/// Writes the comparison report.
///
/// Rows appear by category (banned in both, banned in EU only, high risk in
/// EU), each block in EU source order. The header is written even when the
/// report has no rows.
pub fn write_comparison_report(report: &ComparisonReport, path: &Path) -> Result<WriteOutcome> {
    ensure_parent_dir(path)?;
    let csv_error = |source: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv_writer(path).map_err(csv_error)?;
    writer.write_record(COMPARISON_HEADER).map_err(csv_error)?;
    for entry in report.entries() {
        let details = entry.details.to_string();
        writer
            .write_record([
                entry.category.label(),
                entry.name.as_str(),
                entry.us_cas.as_str(),
                details.as_str(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = report.len(), "Saved comparison results");
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        rows: report.len(),
    })
}
