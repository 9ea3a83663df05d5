//! File classification types
//!
//! A file's [`ExtractionStrategy`] is decided by capability probing, never by
//! extension. [`ProbeOutcome`] is the tri-state result of a single probe.

/// Handling strategy for a scanned file
///
/// Transient classification result; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// File decodes as a raster image; OCR it directly
    Image,
    /// File rasterizes as a PDF; OCR it page by page
    Pdf,
    /// Everything else: structured-document parsing with plain-text fallback
    Structured,
}

impl ExtractionStrategy {
    /// Human-readable label, used in logs and progress output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Structured => "structured",
        }
    }
}

/// Result of probing a file against one strategy
///
/// `Error` means the probe itself failed (I/O, missing renderer); callers
/// treat it exactly like `NoMatch` but log it at debug level so mislabeled
/// or unreadable inputs stay diagnosable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// File matches this strategy
    Match,
    /// File does not match this strategy
    NoMatch,
    /// The probe could not be carried out
    Error(String),
}

impl ProbeOutcome {
    /// Whether the probe positively matched
    pub fn is_match(&self) -> bool {
        matches!(self, ProbeOutcome::Match)
    }
}
