//! Extraction routing
//!
//! Dispatches one classified file to its extraction path and concatenates the
//! resulting fragments into a single text blob.

use super::media::{extract_embedded_media, MediaOutcome};
use super::FRAGMENT_SEPARATOR;
use crate::adapters::document::DocumentParser;
use crate::adapters::ocr::OcrEngine;
use crate::adapters::pdf::PdfRasterizer;
use crate::domain::errors::ExtractionError;
use crate::domain::strategy::ExtractionStrategy;
use std::path::Path;

/// Routes files to the matching extraction path
///
/// Borrows the capability adapters; the coordinator owns them for the
/// lifetime of the scan.
pub struct ExtractionRouter<'a> {
    ocr: &'a dyn OcrEngine,
    rasterizer: &'a dyn PdfRasterizer,
    parser: &'a dyn DocumentParser,
    pdf_dpi: u16,
}

impl<'a> ExtractionRouter<'a> {
    /// Create a router over the given capabilities
    ///
    /// `pdf_dpi` is the page-rendering resolution for PDF OCR, taken from
    /// configuration.
    pub fn new(
        ocr: &'a dyn OcrEngine,
        rasterizer: &'a dyn PdfRasterizer,
        parser: &'a dyn DocumentParser,
        pdf_dpi: u16,
    ) -> Self {
        Self {
            ocr,
            rasterizer,
            parser,
            pdf_dpi,
        }
    }

    /// Extract the text of one file according to its strategy
    pub fn extract(
        &self,
        path: &Path,
        strategy: ExtractionStrategy,
    ) -> Result<String, ExtractionError> {
        match strategy {
            ExtractionStrategy::Image => self.extract_image(path),
            ExtractionStrategy::Pdf => self.extract_pdf(path),
            ExtractionStrategy::Structured => self.extract_structured(path),
        }
    }

    fn extract_image(&self, path: &Path) -> Result<String, ExtractionError> {
        let image = image::ImageReader::open(path)
            .map_err(|e| ExtractionError::Read(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| ExtractionError::Read(e.to_string()))?
            .decode()
            .map_err(|e| ExtractionError::ImageDecode(e.to_string()))?;

        self.ocr.recognize(&image)
    }

    fn extract_pdf(&self, path: &Path) -> Result<String, ExtractionError> {
        let pages = self.rasterizer.rasterize(path, self.pdf_dpi)?;
        tracing::debug!(path = %path.display(), pages = pages.len(), dpi = self.pdf_dpi, "Rasterized PDF");

        let mut fragments = Vec::with_capacity(pages.len());
        for page in &pages {
            fragments.push(self.ocr.recognize(page)?);
        }
        Ok(fragments.join(FRAGMENT_SEPARATOR))
    }

    fn extract_structured(&self, path: &Path) -> Result<String, ExtractionError> {
        let mut fragments = self.parser.parse(path)?;

        // Embedded-media pass: never fails the enclosing document's body text
        match extract_embedded_media(path, self.ocr) {
            Ok(MediaOutcome::Extracted(texts)) => fragments.extend(texts),
            Ok(MediaOutcome::NoEmbeddedMedia) => {
                tracing::debug!(path = %path.display(), "No embedded media");
            }
            Ok(MediaOutcome::NotAnArchive) => {}
            Err(e) => {
                tracing::debug!(path = %path.display(), reason = %e, "Embedded media pass failed");
            }
        }

        Ok(fragments.join(FRAGMENT_SEPARATOR))
    }
}
