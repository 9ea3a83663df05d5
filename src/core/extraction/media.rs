//! Embedded-media OCR pass
//!
//! Office formats are zip archives with a well-known internal media folder
//! per format family. This pass walks those folders, decodes each image in
//! memory and runs it through the OCR engine. The outcome is typed:
//! "not a zip archive" and "no media folder" are ordinary results, not
//! errors, so they can be told apart from real I/O failures in logs without
//! changing control flow.

use crate::adapters::ocr::OcrEngine;
use crate::domain::errors::ExtractionError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Internal media folders by document family: OOXML word processor,
/// spreadsheet and presentation, then the OpenDocument formats
const MEDIA_DIRS: [&str; 4] = ["word/media/", "xl/media/", "ppt/media/", "Pictures/"];

/// Result of the embedded-media pass
#[derive(Debug)]
pub enum MediaOutcome {
    /// Media folder found; OCR text per readable image, in archive order
    Extracted(Vec<String>),
    /// The archive has no media folder (or it is empty)
    NoEmbeddedMedia,
    /// The file is not a zip archive at all
    NotAnArchive,
}

/// OCR every raster image embedded in the document package at `path`
///
/// Individual images that fail to decode or recognize are skipped with a
/// debug log; only failing to read the archive itself is an error, and the
/// caller swallows even that without failing body-text extraction.
pub fn extract_embedded_media(
    path: &Path,
    ocr: &dyn OcrEngine,
) -> Result<MediaOutcome, ExtractionError> {
    let file = File::open(path).map_err(|e| ExtractionError::Media(e.to_string()))?;

    let mut archive = match ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(_) => return Ok(MediaOutcome::NotAnArchive),
    };

    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| !name.ends_with('/'))
        .filter(|name| MEDIA_DIRS.iter().any(|dir| name.starts_with(dir)))
        .map(|name| name.to_string())
        .collect();

    if names.is_empty() {
        return Ok(MediaOutcome::NoEmbeddedMedia);
    }
    names.sort();

    let mut texts = Vec::new();
    for name in &names {
        let mut entry = archive
            .by_name(name)
            .map_err(|e| ExtractionError::Media(format!("Failed to open {name}: {e}")))?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ExtractionError::Media(format!("Failed to read {name}: {e}")))?;

        let image = match image::load_from_memory(&bytes) {
            Ok(image) => image,
            Err(e) => {
                tracing::debug!(entry = %name, reason = %e, "Skipping undecodable embedded file");
                continue;
            }
        };

        match ocr.recognize(&image) {
            Ok(text) if !text.trim().is_empty() => texts.push(text),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(entry = %name, reason = %e, "OCR failed for embedded image");
            }
        }
    }

    Ok(MediaOutcome::Extracted(texts))
}
