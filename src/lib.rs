// Dragnet - PII Directory Scanner
// Copyright (c) 2025 Dragnet Contributors
// Licensed under the MIT License

//! # Dragnet - PII Directory Scanner
//!
//! Dragnet scans a directory tree of heterogeneous files - images, PDFs,
//! office documents, plain text - extracts their textual content (including
//! text inside pictures embedded in documents) and flags personally
//! identifiable information using configurable regex rules and fuzzy keyword
//! matching.
//!
//! ## Overview
//!
//! For every regular file under the scan root, dragnet:
//! - **Classifies** the file by capability probing (never by extension):
//!   raster image, PDF, or structured document
//! - **Extracts** text: direct OCR for images, page-by-page OCR for PDFs,
//!   content-element parsing plus embedded-image OCR for documents
//! - **Detects** PII: regex categories (emails, phone numbers) and fuzzy
//!   keyword categories, deduplicated per file
//! - **Reports** the per-file findings as a timestamped JSON artifact inside
//!   the scanned directory
//!
//! ## Architecture
//!
//! Dragnet follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (classification, extraction, detection, scan
//!   orchestration, PDF conversion)
//! - [`adapters`] - External capabilities (Tesseract OCR, pdfium
//!   rasterization, document parsing)
//! - [`domain`] - Core domain types, rules and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dragnet::adapters::{OfficeParser, PdfiumRasterizer, TesseractOcr};
//! use dragnet::config::DragnetConfig;
//! use dragnet::core::scan::ScanCoordinator;
//! use dragnet::domain::RuleSet;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DragnetConfig::default();
//!     let rules = RuleSet::from_file("definitions.json")?;
//!
//!     // One-time capability initialization, before the walk begins
//!     let ocr = TesseractOcr::new(&config.extraction.languages)?;
//!     let rasterizer = PdfiumRasterizer::new()?;
//!     let parser = OfficeParser::new();
//!
//!     let coordinator = ScanCoordinator::new(&config, &rules, &ocr, &rasterizer, &parser);
//!     let summary = coordinator.run(Path::new("./documents"))?;
//!
//!     println!("Scanned {} files", summary.files_scanned);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Dragnet uses the [`domain::DragnetError`] type for all errors. Per-file
//! extraction failures are isolated by the scan coordinator and never abort
//! a run; only configuration, rules, capability initialization and report
//! write failures are fatal.
//!
//! ## Logging
//!
//! Dragnet uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(file = "broken.docx", "Extraction failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
