//! PDF rasterization capability
//!
//! The classifier probes candidate files through this seam and the router
//! asks it for full-resolution page images to feed the OCR engine.

mod pdfium;

pub use pdfium::PdfiumRasterizer;

use crate::domain::errors::ExtractionError;
use crate::domain::strategy::ProbeOutcome;
use image::DynamicImage;
use std::path::Path;

/// Rasterizes PDF files into ordered page images
pub trait PdfRasterizer {
    /// Cheaply check whether the file rasterizes as a PDF
    ///
    /// Renders a single page at `probe_dpi`. Implementations never fail hard:
    /// "this is not a PDF" is [`ProbeOutcome::NoMatch`], an unreadable file or
    /// an internal renderer failure is [`ProbeOutcome::Error`].
    fn probe(&self, path: &Path, probe_dpi: u16) -> ProbeOutcome;

    /// Rasterize every page at the given DPI, in page order
    ///
    /// Higher DPI improves OCR accuracy on small fonts at a proportional cost
    /// in time and memory; the value comes from configuration, never from a
    /// call-site constant.
    fn rasterize(&self, path: &Path, dpi: u16) -> Result<Vec<DynamicImage>, ExtractionError>;
}
