//! File classification by capability probing
//!
//! Extensions are unreliable - renamed files, missing extensions - so the
//! classifier never looks at them. It asks each capability in turn whether it
//! can handle the file: raster image decode first, then single-page PDF
//! rasterization, and everything else falls through to structured-document
//! handling. Probe failures are demoted to "does not match" and logged at
//! debug level; classification is never scan-fatal.

use crate::adapters::pdf::PdfRasterizer;
use crate::domain::strategy::{ExtractionStrategy, ProbeOutcome};
use std::path::Path;

/// Decide the handling strategy for one file
pub fn classify(
    path: &Path,
    rasterizer: &dyn PdfRasterizer,
    probe_dpi: u16,
) -> ExtractionStrategy {
    match probe_image(path) {
        ProbeOutcome::Match => return ExtractionStrategy::Image,
        ProbeOutcome::NoMatch => {}
        ProbeOutcome::Error(reason) => {
            tracing::debug!(path = %path.display(), %reason, "Image probe failed");
        }
    }

    match rasterizer.probe(path, probe_dpi) {
        ProbeOutcome::Match => return ExtractionStrategy::Pdf,
        ProbeOutcome::NoMatch => {}
        ProbeOutcome::Error(reason) => {
            tracing::debug!(path = %path.display(), %reason, "PDF probe failed");
        }
    }

    ExtractionStrategy::Structured
}

/// Probe whether the file decodes as a raster image
///
/// Format detection reads magic bytes only; a file with a valid header but a
/// corrupt body classifies as Image and the decode failure surfaces at
/// extraction time, where it is isolated per file.
fn probe_image(path: &Path) -> ProbeOutcome {
    let reader = match image::ImageReader::open(path) {
        Ok(reader) => reader,
        Err(e) => return ProbeOutcome::Error(e.to_string()),
    };

    match reader.with_guessed_format() {
        Ok(reader) => {
            if reader.format().is_some() {
                ProbeOutcome::Match
            } else {
                ProbeOutcome::NoMatch
            }
        }
        Err(e) => ProbeOutcome::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ExtractionError;
    use image::DynamicImage;
    use std::io::Write;

    /// Rasterizer stub whose probe always answers the same way
    struct FixedProbe(ProbeOutcome);

    impl PdfRasterizer for FixedProbe {
        fn probe(&self, _path: &Path, _probe_dpi: u16) -> ProbeOutcome {
            self.0.clone()
        }

        fn rasterize(
            &self,
            _path: &Path,
            _dpi: u16,
        ) -> Result<Vec<DynamicImage>, ExtractionError> {
            Ok(Vec::new())
        }
    }

    fn write_png(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200u8, 200, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_png_classifies_as_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "scan.png");

        let strategy = classify(&path, &FixedProbe(ProbeOutcome::NoMatch), 100);
        assert_eq!(strategy, ExtractionStrategy::Image);
    }

    #[test]
    fn test_png_with_txt_extension_still_classifies_as_image() {
        // Probing reads content, not the extension
        let dir = tempfile::tempdir().unwrap();
        let png = write_png(dir.path(), "scan.png");
        let renamed = dir.path().join("scan.txt");
        std::fs::rename(&png, &renamed).unwrap();

        let strategy = classify(&renamed, &FixedProbe(ProbeOutcome::NoMatch), 100);
        assert_eq!(strategy, ExtractionStrategy::Image);
    }

    #[test]
    fn test_text_with_jpg_extension_falls_through_to_structured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "just plain text, not a picture").unwrap();

        let strategy = classify(&path, &FixedProbe(ProbeOutcome::NoMatch), 100);
        assert_eq!(strategy, ExtractionStrategy::Structured);
    }

    #[test]
    fn test_pdf_probe_match_classifies_as_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF-1.4 stub").unwrap();

        let strategy = classify(&path, &FixedProbe(ProbeOutcome::Match), 100);
        assert_eq!(strategy, ExtractionStrategy::Pdf);
    }

    #[test]
    fn test_probe_error_is_treated_as_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.bin");
        std::fs::write(&path, b"\x00\x01\x02\x03").unwrap();

        let rasterizer = FixedProbe(ProbeOutcome::Error("renderer crashed".to_string()));
        let strategy = classify(&path, &rasterizer, 100);
        assert_eq!(strategy, ExtractionStrategy::Structured);
    }
}
