//! Core business logic
//!
//! The scan pipeline lives here:
//!
//! - [`classifier`] - capability-probing file classification
//! - [`extraction`] - strategy dispatch, per-format text extraction,
//!   embedded-media OCR
//! - [`detection`] - regex and fuzzy-keyword PII detection
//! - [`scan`] - the directory-walk coordinator and report artifact
//! - [`convert`] - office-to-PDF batch conversion (separate utility, not on
//!   the scan path)

pub mod classifier;
pub mod convert;
pub mod detection;
pub mod extraction;
pub mod scan;
