//! Writers for flat record lists.

use std::path::Path;

use serde::Serialize;

use crate::common::{WriteOutcome, ensure_parent_dir};
use crate::error::{OutputError, Result};

/// Writes `records` as CSV, one row per record.
///
/// The header is the field names of the record type, in declaration order.
/// An empty list is not an error: a warning is logged and no file is
/// created.
pub fn write_records<T: Serialize>(records: &[T], path: &Path) -> Result<WriteOutcome> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "No records to save, skipping file");
        return Ok(WriteOutcome::Skipped {
            path: path.to_path_buf(),
        });
    }

    ensure_parent_dir(path)?;
    let csv_error = |source: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv_writer(path).map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "Saved records");
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

/// CSV writer with CRLF record terminators and minimal quoting.
pub(crate) fn csv_writer(path: &Path) -> csv::Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
}
