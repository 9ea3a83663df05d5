//! pdfium-backed PDF rasterizer
//!
//! Binds to the system pdfium library at runtime. Page geometry is expressed
//! in PDF points (72 per inch), so a requested DPI maps to a render scale of
//! `dpi / 72`.

use super::PdfRasterizer;
use crate::domain::errors::{DragnetError, ExtractionError};
use crate::domain::result::Result;
use crate::domain::strategy::ProbeOutcome;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// PDF rasterizer backed by the pdfium library
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Bind to the system pdfium library
    ///
    /// # Errors
    ///
    /// Returns [`DragnetError::RasterizerInit`] if no pdfium library can be
    /// found. Like OCR initialization, this is surfaced before any file is
    /// processed.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_system_library().map_err(|e| {
            DragnetError::RasterizerInit(format!("pdfium library not available: {e}"))
        })?;

        tracing::debug!("pdfium rasterizer initialized");

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    fn render_config(dpi: u16) -> PdfRenderConfig {
        PdfRenderConfig::new().scale_page_by_factor(f32::from(dpi) / 72.0)
    }
}

impl PdfRasterizer for PdfiumRasterizer {
    fn probe(&self, path: &Path, probe_dpi: u16) -> ProbeOutcome {
        // An unreadable file is a probe error, not a format mismatch
        if let Err(e) = std::fs::metadata(path) {
            return ProbeOutcome::Error(e.to_string());
        }

        let document = match self.pdfium.load_pdf_from_file(path, None) {
            Ok(document) => document,
            Err(_) => return ProbeOutcome::NoMatch,
        };

        let pages = document.pages();
        let first_page = match pages.first() {
            Ok(page) => page,
            Err(_) => return ProbeOutcome::NoMatch,
        };

        let outcome = match first_page.render_with_config(&Self::render_config(probe_dpi)) {
            Ok(_) => ProbeOutcome::Match,
            Err(e) => ProbeOutcome::Error(e.to_string()),
        };
        outcome
    }

    fn rasterize(
        &self,
        path: &Path,
        dpi: u16,
    ) -> std::result::Result<Vec<DynamicImage>, ExtractionError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractionError::Rasterize(e.to_string()))?;

        let config = Self::render_config(dpi);
        let pages = document.pages();
        let mut images = Vec::with_capacity(pages.len() as usize);

        for page in pages.iter() {
            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| ExtractionError::Rasterize(e.to_string()))?;
            images.push(bitmap.as_image());
        }

        Ok(images)
    }
}
