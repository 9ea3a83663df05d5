//! PII detection
//!
//! Combines regex extraction for pattern categories (emails, phone numbers)
//! with fuzzy keyword matching for everything else. [`similarity`] holds the
//! tokenization and scoring primitives, [`detector`] the detection engine.

pub mod detector;
pub mod similarity;

pub use detector::PiiDetector;
pub use similarity::{normalize_token, similarity, tokenize};
