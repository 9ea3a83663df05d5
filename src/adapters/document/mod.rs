//! Structured-document parsing capability
//!
//! Produces the ordered content elements the router concatenates into body
//! text for anything that is neither a raster image nor a PDF.

mod office;

pub use office::OfficeParser;

use crate::domain::errors::ExtractionError;
use std::path::Path;

/// Parses a file into an ordered sequence of textual content elements
///
/// Element granularity is paragraph-like: one element per paragraph, heading,
/// shared string or slide paragraph, depending on the format. Implementations
/// must degrade gracefully on arbitrary byte streams - a file that failed the
/// image and PDF probes still ends up here.
pub trait DocumentParser {
    /// Extract the ordered content elements of `path`
    fn parse(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;
}
