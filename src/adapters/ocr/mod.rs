//! OCR capability
//!
//! Defines the [`OcrEngine`] trait the extraction router calls for every
//! raster image it encounters - standalone image files, rasterized PDF
//! pages and images embedded inside office documents all go through the
//! same seam.

mod tesseract;

pub use tesseract::TesseractOcr;

use crate::domain::errors::ExtractionError;
use image::DynamicImage;

/// Text recognition over a single raster image
///
/// Implementations perform their one-time initialization (loading language
/// models, locating binaries) in their constructor, before the directory
/// walk begins; `recognize` must be cheap to call many times. Taking `&self`
/// keeps implementations stateless-safe, so a future worker-pool
/// parallelization can share or pool engines per worker.
pub trait OcrEngine {
    /// Recognize text in one image
    ///
    /// Returns the recognized lines joined with newlines. Line granularity is
    /// the unit of recognition output; bounding boxes and confidences are not
    /// retained.
    fn recognize(&self, image: &DynamicImage) -> Result<String, ExtractionError>;
}
