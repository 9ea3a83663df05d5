//! Text extraction
//!
//! Turns one classified file into one text blob. The [`router`] dispatches on
//! the file's [`ExtractionStrategy`](crate::domain::ExtractionStrategy) and
//! the [`media`] pass OCRs raster images embedded inside zip-packaged
//! document formats.

pub mod media;
pub mod router;

pub use media::{extract_embedded_media, MediaOutcome};
pub use router::ExtractionRouter;

/// Separator between extracted fragments (pages, content elements, embedded
/// images). For human readability only; detection does not depend on it.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";
