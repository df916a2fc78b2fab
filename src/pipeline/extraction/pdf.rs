//! PDF text-layer extraction via Google PDFium.
//!
//! Reads the embedded text layer directly — no rendering, no OCR. Scanned
//! PDFs without a text layer come back (near-)empty and classify as
//! `no_class`, which the reconciliation report surfaces as an unexpected
//! document.
//!
//! A fresh `Pdfium` handle is created per call because the upstream type is
//! `!Send`. The OS caches `dlopen` calls, so repeat loads are near-free.

use pdfium_render::prelude::*;

use super::ExtractionError;

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pdfium = load_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    if document.pages().len() == 0 {
        return Err(ExtractionError::EmptyDocument);
    }

    let mut out = String::new();
    for page in document.pages().iter() {
        let text = page.text().map(|t| t.all()).unwrap_or_default();
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&text);
    }

    Ok(out)
}

/// Load the PDFium dynamic library.
///
/// Discovery order:
/// 1. `PDFIUM_DYNAMIC_LIB_PATH` env var (explicit path to the library file)
/// 2. Alongside the running executable
/// 3. System library search paths
fn load_pdfium() -> Result<Pdfium, ExtractionError> {
    if let Ok(path) = std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
        tracing::debug!(path = %path, "loading PDFium from env var");
        let bindings = Pdfium::bind_to_library(&path)
            .map_err(|e| ExtractionError::Pdf(format!("PDFium at {path}: {e}")))?;
        return Ok(Pdfium::new(bindings));
    }

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ExtractionError::Pdf(format!("PDFium library not found: {e}")))?;

    Ok(Pdfium::new(bindings))
}
