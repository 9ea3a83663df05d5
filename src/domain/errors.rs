//! Domain error types
//!
//! This module defines the error hierarchy for dragnet. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main dragnet error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DragnetError {
    /// Configuration-related errors (config file, CLI overrides)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rules file errors (missing file, malformed JSON, bad regex)
    #[error("Rules error: {0}")]
    Rules(String),

    /// OCR engine initialization errors
    #[error("OCR initialization error: {0}")]
    OcrInit(String),

    /// PDF rasterizer initialization errors
    #[error("PDF rasterizer initialization error: {0}")]
    RasterizerInit(String),

    /// Per-file extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Report artifact errors (serialization, write failure)
    #[error("Report error: {0}")]
    Report(String),

    /// Document conversion errors
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Extraction-specific errors
///
/// Errors that occur while extracting text from a single file. These are
/// caught at the file level by the scan coordinator and never abort the walk.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// File could not be read
    #[error("Failed to read file: {0}")]
    Read(String),

    /// Raster image could not be decoded
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    /// PDF could not be rasterized
    #[error("Failed to rasterize PDF: {0}")]
    Rasterize(String),

    /// OCR recognition failed
    #[error("OCR recognition failed: {0}")]
    Ocr(String),

    /// Structured-document parsing failed
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// Embedded-media pass failed with a real I/O error
    ///
    /// Distinct from the typed "not an archive / no media folder" outcomes,
    /// which are not errors at all.
    #[error("Embedded media error: {0}")]
    Media(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for DragnetError {
    fn from(err: std::io::Error) -> Self {
        DragnetError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DragnetError {
    fn from(err: serde_json::Error) -> Self {
        DragnetError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DragnetError {
    fn from(err: toml::de::Error) -> Self {
        DragnetError::Configuration(format!("TOML parse error: {err}"))
    }
}
