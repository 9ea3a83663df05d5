//! Scan coordinator - main orchestrator for the scan process
//!
//! Walks the directory, drives classify → extract → detect for every regular
//! file and writes the report artifact at the end. Per-file failures are
//! isolated: the file is recorded with empty findings and the walk continues.

use crate::adapters::document::DocumentParser;
use crate::adapters::ocr::OcrEngine;
use crate::adapters::pdf::PdfRasterizer;
use crate::config::DragnetConfig;
use crate::core::classifier::classify;
use crate::core::detection::PiiDetector;
use crate::core::extraction::ExtractionRouter;
use crate::core::scan::artifact::{is_report_artifact, write_report};
use crate::domain::errors::DragnetError;
use crate::domain::report::ScanReport;
use crate::domain::result::Result;
use crate::domain::rules::RuleSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Outcome of one scan run
#[derive(Debug)]
pub struct ScanSummary {
    /// Files scanned successfully
    pub files_scanned: usize,
    /// Files whose extraction failed (recorded with empty findings)
    pub files_failed: usize,
    /// Total matched values across all files and categories
    pub total_findings: usize,
    /// Where the report artifact was written
    pub artifact_path: PathBuf,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

/// Scan coordinator
///
/// Borrows the configuration, the compiled rules and the capability
/// adapters; all are constructed once before the walk begins.
pub struct ScanCoordinator<'a> {
    config: &'a DragnetConfig,
    rules: &'a RuleSet,
    ocr: &'a dyn OcrEngine,
    rasterizer: &'a dyn PdfRasterizer,
    parser: &'a dyn DocumentParser,
}

impl<'a> ScanCoordinator<'a> {
    /// Create a new scan coordinator
    pub fn new(
        config: &'a DragnetConfig,
        rules: &'a RuleSet,
        ocr: &'a dyn OcrEngine,
        rasterizer: &'a dyn PdfRasterizer,
        parser: &'a dyn DocumentParser,
    ) -> Self {
        Self {
            config,
            rules,
            ocr,
            rasterizer,
            parser,
        }
    }

    /// Scan `directory` and write the report artifact into it
    ///
    /// # Errors
    ///
    /// Only whole-run failures are returned: an unreadable root directory or
    /// a failed artifact write. Per-file extraction problems never abort the
    /// walk.
    pub fn run(&self, directory: &Path) -> Result<ScanSummary> {
        let start = Instant::now();

        if !directory.is_dir() {
            return Err(DragnetError::Io(format!(
                "Not a directory: {}",
                directory.display()
            )));
        }

        let router = ExtractionRouter::new(
            self.ocr,
            self.rasterizer,
            self.parser,
            self.config.extraction.pdf_dpi,
        );
        let detector = PiiDetector::new(self.config.detection.fuzzy_threshold);

        let mut report = ScanReport::new();
        let mut files_scanned = 0usize;
        let mut files_failed = 0usize;

        let mut walker = WalkDir::new(directory).min_depth(1);
        if !self.config.scan.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(reason = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if is_report_artifact(&file_name, &self.config.scan.report_prefix) {
                tracing::debug!(file = %file_name, "Skipping prior report artifact");
                continue;
            }

            if let Some(limit_mb) = self.config.scan.max_file_size_mb {
                if let Ok(metadata) = entry.metadata() {
                    if metadata.len() > limit_mb * 1024 * 1024 {
                        tracing::debug!(file = %file_name, size = metadata.len(), "Skipping oversized file");
                        continue;
                    }
                }
            }

            let path = entry.path();
            println!("Scanning {file_name}...");

            // Resolved path is the report key; fall back to the walked path
            // for files that vanish mid-scan
            let key = path
                .canonicalize()
                .unwrap_or_else(|_| path.to_path_buf())
                .display()
                .to_string();

            let strategy = classify(path, self.rasterizer, self.config.extraction.probe_dpi);
            tracing::debug!(file = %file_name, strategy = strategy.label(), "Classified");

            match router.extract(path, strategy) {
                Ok(text) => {
                    let findings = detector.detect(&text, self.rules);
                    report.insert(key, findings);
                    files_scanned += 1;
                }
                Err(e) => {
                    tracing::warn!(file = %file_name, reason = %e, "Extraction failed");
                    eprintln!("  failed: {e}");
                    report.insert(key, self.rules.empty_findings());
                    files_failed += 1;
                }
            }
        }

        let total_findings = report.total_findings();
        let artifact_path = write_report(directory, &self.config.scan.report_prefix, &report)?;

        Ok(ScanSummary {
            files_scanned,
            files_failed,
            total_findings,
            artifact_path,
            duration: start.elapsed(),
        })
    }
}
