//! Text extraction, dispatched by file extension.
//!
//! Extraction is a thin shim in front of the classifier: each supported
//! format yields a plain-text rendition good enough for category scoring,
//! nothing more. Dispatch is extension-based by design — the upload form
//! names its files, and an unrecognized extension is a user-correctable
//! input error, not a reason to sniff bytes.

pub mod docx;
pub mod pdf;
pub mod rtf;
pub mod xlsx;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Text encoding error: {0}")]
    Encoding(String),

    #[error("DOCX parsing failed: {0}")]
    Docx(String),

    #[error("XLSX parsing failed: {0}")]
    Xlsx(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("Document is empty")]
    EmptyDocument,
}

/// Extract plain text from one uploaded file, dispatching on its
/// (lowercased) extension. Supported: txt, rtf, pdf, docx, xlsx.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| ExtractionError::UnsupportedFileType(filename.to_string()))?;

    let text = match ext.as_str() {
        "txt" => String::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractionError::Encoding(e.to_string()))?,
        "rtf" => rtf::extract(bytes)?,
        "pdf" => pdf::extract(bytes)?,
        "docx" => docx::extract(bytes)?,
        "xlsx" => xlsx::extract(bytes)?,
        _ => return Err(ExtractionError::UnsupportedFileType(filename.to_string())),
    };

    tracing::debug!(filename, format = %ext, chars = text.len(), "text extracted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_is_read_as_utf8() {
        let text = extract_text("note.txt", "Соглашение сторон".as_bytes()).unwrap();
        assert_eq!(text, "Соглашение сторон");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let text = extract_text("NOTE.TXT", b"hello").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = extract_text("archive.tar.gz", b"...").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFileType(_)));
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let err = extract_text("README", b"...").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFileType(_)));
    }

    #[test]
    fn invalid_utf8_txt_is_an_encoding_error() {
        let err = extract_text("bad.txt", &[0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractionError::Encoding(_)));
    }
}
