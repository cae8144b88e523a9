use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::documents::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";

fn docx_error(e: impl std::fmt::Display) -> DocumentError {
    DocumentError::Docx(e.to_string())
}

/// Reads `word/document.xml` and returns one line per non-empty `w:p`
/// paragraph. `w:tab` and `w:br` become a space and a line break.
pub fn extract_docx_text(data: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf).map_err(docx_error)? {
            Event::Start(e) if e.name().as_ref() == b"w:p" => {
                in_paragraph = true;
                current.clear();
            }
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                let line = current.trim();
                if !line.is_empty() {
                    lines.push(line.to_string());
                }
                current.clear();
                in_paragraph = false;
            }
            Event::Empty(e) if in_paragraph => match e.name().as_ref() {
                b"w:tab" => current.push(' '),
                b"w:br" => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_paragraph => {
                current.push_str(&e.xml_content().map_err(docx_error)?);
            }
            Event::GeneralRef(e) if in_paragraph => {
                if let Some(ch) = e.resolve_char_ref().map_err(docx_error)? {
                    current.push(ch);
                } else {
                    let name = e.decode().map_err(docx_error)?;
                    if let Some(value) = quick_xml::escape::resolve_predefined_entity(&name) {
                        current.push_str(value);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(lines.join("\n"))
}
