//! Tesseract-backed OCR engine
//!
//! Invokes the system Tesseract installation through `rusty-tesseract`. The
//! constructor checks the installation and the requested languages up front,
//! so a missing language model surfaces before any file is processed instead
//! of failing midway through a scan.

use super::OcrEngine;
use crate::domain::errors::{DragnetError, ExtractionError};
use crate::domain::result::Result;
use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;

/// OCR engine backed by a system Tesseract installation
pub struct TesseractOcr {
    args: Args,
}

impl TesseractOcr {
    /// Create a new engine for the given language identifiers (e.g. `eng`,
    /// `deu`)
    ///
    /// This is the one-time, process-lifetime initialization: it verifies
    /// that Tesseract is installed and that every requested language model is
    /// available. Construct once before the directory walk and reuse across
    /// all files.
    ///
    /// # Errors
    ///
    /// Returns [`DragnetError::OcrInit`] if Tesseract is not installed or a
    /// requested language model is missing.
    pub fn new(languages: &[String]) -> Result<Self> {
        if languages.is_empty() {
            return Err(DragnetError::OcrInit(
                "At least one OCR language is required".to_string(),
            ));
        }

        let version = rusty_tesseract::get_tesseract_version()
            .map_err(|e| DragnetError::OcrInit(format!("Tesseract not available: {e}")))?;

        let installed = rusty_tesseract::get_tesseract_langs()
            .map_err(|e| DragnetError::OcrInit(format!("Failed to list languages: {e}")))?;

        for lang in languages {
            if !installed.iter().any(|l| l == lang) {
                return Err(DragnetError::OcrInit(format!(
                    "Language model '{lang}' is not installed (available: {})",
                    installed.join(", ")
                )));
            }
        }

        tracing::info!(
            version = %version.trim(),
            languages = %languages.join("+"),
            "Tesseract OCR initialized"
        );

        Ok(Self {
            args: Args {
                lang: languages.join("+"),
                config_variables: HashMap::new(),
                dpi: None,
                psm: None,
                oem: None,
            },
        })
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &DynamicImage) -> std::result::Result<String, ExtractionError> {
        let image = Image::from_dynamic_image(image)
            .map_err(|e| ExtractionError::Ocr(format!("Failed to prepare image: {e}")))?;

        let text = rusty_tesseract::image_to_string(&image, &self.args)
            .map_err(|e| ExtractionError::Ocr(e.to_string()))?;

        Ok(text.trim_end().to_string())
    }
}
