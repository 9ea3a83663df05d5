//! Report artifact handling
//!
//! Reports are written into the scanned directory itself, so repeated runs
//! would otherwise re-ingest their own output and grow without bound. The
//! filename heuristic below is what the walk uses to exclude prior
//! artifacts.

use crate::domain::errors::DragnetError;
use crate::domain::report::ScanReport;
use crate::domain::result::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Artifact filename for a report written at `timestamp`
///
/// Second granularity; e.g. `dragnet_report_2025-11-30_142359.json`.
pub fn artifact_file_name(prefix: &str, timestamp: DateTime<Local>) -> String {
    format!("{prefix}_{}.json", timestamp.format("%Y-%m-%d_%H%M%S"))
}

/// Whether a filename looks like a prior report artifact
///
/// Matched heuristically: the name carries the report prefix and a `.json`
/// extension. Anything matching is skipped by the walk.
pub fn is_report_artifact(file_name: &str, prefix: &str) -> bool {
    file_name.contains(prefix)
        && Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Serialize the report into `directory`, pretty-printed
///
/// Returns the artifact path. A write failure here is fatal for the run; the
/// in-memory results are lost with it.
pub fn write_report(directory: &Path, prefix: &str, report: &ScanReport) -> Result<PathBuf> {
    let path = directory.join(artifact_file_name(prefix, Local::now()));
    let json = serde_json::to_string_pretty(report)?;

    std::fs::write(&path, json).map_err(|e| {
        DragnetError::Report(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), files = report.len(), "Report written");
    Ok(path)
}
