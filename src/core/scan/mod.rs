//! Scan orchestration
//!
//! The [`coordinator`] walks the directory and drives classify → extract →
//! detect per file; [`artifact`] handles the timestamped report file and the
//! self-exclusion heuristic that keeps prior reports out of later scans.

pub mod artifact;
pub mod coordinator;

pub use artifact::{artifact_file_name, is_report_artifact, write_report};
pub use coordinator::{ScanCoordinator, ScanSummary};
