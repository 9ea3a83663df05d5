//! End-to-end scan tests over a temporary directory
//!
//! Exercises the full classify → extract → detect → report pipeline with
//! stubbed OCR and rasterization, so no native binaries are required.

use dragnet::adapters::document::{DocumentParser, OfficeParser};
use dragnet::adapters::ocr::OcrEngine;
use dragnet::adapters::pdf::PdfRasterizer;
use dragnet::config::DragnetConfig;
use dragnet::core::scan::ScanCoordinator;
use dragnet::domain::errors::ExtractionError;
use dragnet::domain::{ProbeOutcome, RuleSet};
use image::DynamicImage;
use std::path::Path;

const RULES_JSON: &str = r#"{
    "Email": { "regex": "[\\w.+-]+@[\\w-]+\\.[\\w.-]+" },
    "Phone Number": { "regex": "\\d{3}-\\d{3}-\\d{4}" }
}"#;

/// OCR stub; plain-text scans never reach it
struct NoopOcr;

impl OcrEngine for NoopOcr {
    fn recognize(&self, _image: &DynamicImage) -> Result<String, ExtractionError> {
        Ok(String::new())
    }
}

/// Rasterizer stub that matches nothing
struct NoPdf;

impl PdfRasterizer for NoPdf {
    fn probe(&self, _path: &Path, _probe_dpi: u16) -> ProbeOutcome {
        ProbeOutcome::NoMatch
    }

    fn rasterize(&self, _path: &Path, _dpi: u16) -> Result<Vec<DynamicImage>, ExtractionError> {
        Ok(Vec::new())
    }
}

fn find_report_entry<'a>(
    report: &'a serde_json::Value,
    file_name: &str,
) -> &'a serde_json::Value {
    report
        .as_object()
        .unwrap()
        .iter()
        .find(|(path, _)| path.ends_with(file_name))
        .map(|(_, findings)| findings)
        .unwrap_or_else(|| panic!("no report entry for {file_name}"))
}

#[test]
fn test_end_to_end_plain_text_scan() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("contact.txt"),
        "Contact: jane@example.com or 555-123-4567",
    )
    .unwrap();

    let config = DragnetConfig::default();
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let ocr = NoopOcr;
    let rasterizer = NoPdf;
    let parser = OfficeParser::new();

    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
    let summary = coordinator.run(dir.path()).unwrap();

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_failed, 0);
    assert_eq!(summary.total_findings, 2);
    assert!(summary.artifact_path.exists());
    assert!(summary.artifact_path.starts_with(dir.path()));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary.artifact_path).unwrap()).unwrap();
    let entry = find_report_entry(&report, "contact.txt");

    assert_eq!(entry["Email"][0], "jane@example.com");
    assert_eq!(entry["Phone Number"][0], "555-123-4567");
}

#[test]
fn test_second_run_excludes_first_report_artifact() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("note.txt"), "hello jane@example.com").unwrap();

    let config = DragnetConfig::default();
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let ocr = NoopOcr;
    let rasterizer = NoPdf;
    let parser = OfficeParser::new();
    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);

    let first = coordinator.run(dir.path()).unwrap();
    assert_eq!(first.files_scanned, 1);

    let second = coordinator.run(dir.path()).unwrap();
    // The first run's artifact is in the directory but must not be ingested
    assert_eq!(second.files_scanned, 1);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&second.artifact_path).unwrap()).unwrap();
    assert!(report
        .as_object()
        .unwrap()
        .keys()
        .all(|path| !path.ends_with(".json")));
}

#[test]
fn test_per_file_failure_does_not_abort_the_walk() {
    /// Parser that refuses one specific file
    struct PoisonParser {
        inner: OfficeParser,
    }

    impl DocumentParser for PoisonParser {
        fn parse(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
            if path.file_name().is_some_and(|n| n == "poison.txt") {
                return Err(ExtractionError::Parse("simulated corruption".to_string()));
            }
            self.inner.parse(path)
        }
    }

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("poison.txt"), "whatever").unwrap();
    std::fs::write(dir.path().join("fine.txt"), "reach me: jane@example.com").unwrap();

    let config = DragnetConfig::default();
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let ocr = NoopOcr;
    let rasterizer = NoPdf;
    let parser = PoisonParser {
        inner: OfficeParser::new(),
    };

    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
    let summary = coordinator.run(dir.path()).unwrap();

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_failed, 1);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary.artifact_path).unwrap()).unwrap();

    // The failed file is recorded with every category empty
    let poisoned = find_report_entry(&report, "poison.txt");
    assert_eq!(poisoned["Email"].as_array().unwrap().len(), 0);
    assert_eq!(poisoned["Phone Number"].as_array().unwrap().len(), 0);

    // The healthy file was still scanned
    let fine = find_report_entry(&report, "fine.txt");
    assert_eq!(fine["Email"][0], "jane@example.com");
}

#[test]
fn test_shallow_scan_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("top.txt"), "top jane@example.com").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(
        dir.path().join("nested").join("deep.txt"),
        "deep bob@example.com",
    )
    .unwrap();

    let mut config = DragnetConfig::default();
    config.scan.recursive = false;

    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let ocr = NoopOcr;
    let rasterizer = NoPdf;
    let parser = OfficeParser::new();

    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
    let summary = coordinator.run(dir.path()).unwrap();

    assert_eq!(summary.files_scanned, 1);

    // A recursive run picks up both text files; the shallow run's report
    // artifact is excluded by the filename heuristic
    config.scan.recursive = true;
    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
    let summary = coordinator.run(dir.path()).unwrap();
    assert_eq!(summary.files_scanned, 2);
}

#[test]
fn test_scan_of_missing_directory_is_an_error() {
    let config = DragnetConfig::default();
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let ocr = NoopOcr;
    let rasterizer = NoPdf;
    let parser = OfficeParser::new();

    let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
    let result = coordinator.run(Path::new("/definitely/not/a/directory"));
    assert!(result.is_err());
}
