// Uploaded-document decoding: file bytes in, plain résumé text out.

pub mod docx;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("Document contains no extractable text")]
    Empty,

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from the file extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentKind::PlainText),
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(DocumentError::Unsupported(file_name.to_string())),
        }
    }
}

/// Decodes `data` according to the file name's extension. CPU-bound for
/// PDFs; callers on the async runtime should use `spawn_blocking`.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, DocumentError> {
    let text = match DocumentKind::from_file_name(file_name)? {
        DocumentKind::PlainText => String::from_utf8_lossy(data).into_owned(),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            tracing::warn!(file_name, "PDF text extraction failed: {e}");
            DocumentError::Pdf(e.to_string())
        })?,
        DocumentKind::Docx => docx::extract_docx_text(data)?,
    };

    // PDF extraction leaves \r\n and form feeds behind
    let text = text.replace("\r\n", "\n").replace('\u{c}', "\n");
    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }

    tracing::debug!(file_name, characters = text.chars().count(), "decoded document");
    Ok(text)
}
