//! Scan report model
//!
//! The report maps each scanned file to its per-category PII findings.
//! `BTreeMap`/`BTreeSet` keep serialization deterministic across runs, which
//! matters for diffing report artifacts.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Findings for one file: category name → set of unique matched strings
///
/// Matched values are case-sensitive as extracted; uniqueness is the
/// invariant, order carries no meaning. Every configured category is present
/// even when its set is empty.
pub type CategoryFindings = BTreeMap<String, BTreeSet<String>>;

/// Full scan report: file path → category findings
///
/// Created empty at scan start, grown monotonically during the walk and
/// written once at scan end.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    files: BTreeMap<String, CategoryFindings>,
}

impl ScanReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the findings for one file
    pub fn insert(&mut self, path: String, findings: CategoryFindings) {
        self.files.insert(path, findings);
    }

    /// Findings for a specific file, if it was scanned
    pub fn get(&self, path: &str) -> Option<&CategoryFindings> {
        self.files.get(path)
    }

    /// Number of files recorded
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether any file has been recorded
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over recorded files and their findings
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CategoryFindings)> {
        self.files.iter()
    }

    /// Total number of matched values across all files and categories
    pub fn total_findings(&self) -> usize {
        self.files
            .values()
            .map(|categories| categories.values().map(|set| set.len()).sum::<usize>())
            .sum()
    }
}
