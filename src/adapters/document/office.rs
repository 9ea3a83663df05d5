//! Built-in structured-document parser
//!
//! Handles the zip-packaged XML office families (OOXML word processor,
//! spreadsheet and presentation documents, plus the OpenDocument formats) by
//! pulling character data out of their well-known body parts. Anything that
//! is not a zip archive falls back to lossy UTF-8 text split into paragraphs.

use super::DocumentParser;
use crate::domain::errors::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Default structured-document parser
#[derive(Debug, Default)]
pub struct OfficeParser;

impl OfficeParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    fn parse_zip(archive: &mut ZipArchive<File>) -> Result<Option<Vec<String>>, ExtractionError> {
        // OOXML word processor: one body part, w:p paragraph boundaries
        if let Some(xml) = read_entry(archive, "word/document.xml")? {
            return Ok(Some(elements_from_xml(&xml, &[b"p"])));
        }

        // OOXML spreadsheet: shared strings, one element per string item
        if let Some(xml) = read_entry(archive, "xl/sharedStrings.xml")? {
            return Ok(Some(elements_from_xml(&xml, &[b"si"])));
        }

        // OOXML presentation: one part per slide, a:p paragraph boundaries
        let mut slides: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .map(|name| name.to_string())
            .collect();
        if !slides.is_empty() {
            slides.sort_by_key(|name| slide_number(name));
            let mut elements = Vec::new();
            for slide in slides {
                if let Some(xml) = read_entry(archive, &slide)? {
                    elements.extend(elements_from_xml(&xml, &[b"p"]));
                }
            }
            return Ok(Some(elements));
        }

        // OpenDocument: one content part, text:p / text:h boundaries
        if let Some(xml) = read_entry(archive, "content.xml")? {
            return Ok(Some(elements_from_xml(&xml, &[b"p", b"h"])));
        }

        // A zip, but not a document package we know
        Ok(None)
    }

    fn parse_plain_text(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::Read(e.to_string()))?;
        let text = String::from_utf8_lossy(&bytes);

        let mut elements = Vec::new();
        let mut paragraph = String::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !paragraph.is_empty() {
                    elements.push(std::mem::take(&mut paragraph));
                }
            } else {
                if !paragraph.is_empty() {
                    paragraph.push('\n');
                }
                paragraph.push_str(line);
            }
        }
        if !paragraph.is_empty() {
            elements.push(paragraph);
        }
        Ok(elements)
    }
}

impl DocumentParser for OfficeParser {
    fn parse(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let file = File::open(path).map_err(|e| ExtractionError::Read(e.to_string()))?;

        match ZipArchive::new(file) {
            Ok(mut archive) => match Self::parse_zip(&mut archive)? {
                Some(elements) => Ok(elements),
                // Unknown zip layout: no body text, embedded-media pass may
                // still find something
                None => Ok(Vec::new()),
            },
            Err(_) => Self::parse_plain_text(path),
        }
    }
}

/// Read a zip entry to a string, `None` if the entry does not exist
fn read_entry(
    archive: &mut ZipArchive<File>,
    name: &str,
) -> Result<Option<String>, ExtractionError> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut contents = String::new();
            entry
                .read_to_string(&mut contents)
                .map_err(|e| ExtractionError::Parse(format!("Failed to read {name}: {e}")))?;
            Ok(Some(contents))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(ExtractionError::Parse(format!(
            "Failed to open {name}: {e}"
        ))),
    }
}

/// Collect character data from an XML part, flushing one element per
/// `boundary` end tag (matched on local name, so `w:p`, `a:p` and `text:p`
/// all match `p`)
fn elements_from_xml(xml: &str, boundaries: &[&[u8]]) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut elements = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(text)) => {
                if let Ok(value) = text.unescape() {
                    current.push_str(&value);
                }
            }
            Ok(Event::End(end)) => {
                if boundaries.contains(&end.local_name().as_ref()) && !current.trim().is_empty() {
                    elements.push(std::mem::take(&mut current).trim().to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            // Malformed XML inside an otherwise valid package: keep whatever
            // text was collected so far
            Err(_) => break,
        }
    }

    if !current.trim().is_empty() {
        elements.push(current.trim().to_string());
    }

    elements
}

/// Numeric suffix of a slide part name, for page-order sorting
fn slide_number(name: &str) -> u32 {
    name.trim_start_matches("ppt/slides/slide")
        .trim_end_matches(".xml")
        .parse()
        .unwrap_or(u32::MAX)
}
