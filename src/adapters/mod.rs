//! External capability adapters
//!
//! This module wraps the external collaborators the scan pipeline consumes:
//!
//! - [`ocr`] - text recognition over a single raster image (Tesseract)
//! - [`pdf`] - PDF rasterization at a given DPI (pdfium)
//! - [`document`] - structured-document parsing into ordered content elements
//!
//! Each capability is a trait so the core pipeline can be exercised in tests
//! without the native binaries installed.

pub mod document;
pub mod ocr;
pub mod pdf;

pub use document::{DocumentParser, OfficeParser};
pub use ocr::{OcrEngine, TesseractOcr};
pub use pdf::{PdfRasterizer, PdfiumRasterizer};
