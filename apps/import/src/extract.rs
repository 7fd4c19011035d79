//! PDF text extraction — the parser's input precondition, enforced in one place.
//!
//! Extraction itself is `pdf-extract`'s job; this wrapper only rejects
//! non-PDF bytes up front and refuses documents whose extracted text is all
//! whitespace (scanned images, empty pages), so the parser downstream can
//! stay total over its input.

use tracing::debug;

use crate::errors::ImportError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts concatenated per-page plain text from PDF bytes, page order
/// preserved.
///
/// Fails with [`ImportError::UnsupportedFileType`] for non-PDF input and
/// [`ImportError::UnreadableDocument`] when the document contains no
/// extractable text.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ImportError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ImportError::UnsupportedFileType(
            "expected a PDF document".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ImportError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ImportError::UnreadableDocument);
    }

    debug!(bytes = bytes.len(), chars = text.len(), "extracted resume text");
    Ok(text)
}
