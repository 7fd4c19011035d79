use thiserror::Error;

/// Import-pipeline error type.
///
/// The parser itself is total and never produces one of these — every variant
/// belongs to a collaborator boundary: file-type and extraction preconditions
/// upstream of the parser, document-store failures downstream of it.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("No extractable text in document")]
    UnreadableDocument,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("Document store error: {0}")]
    Store(#[from] anyhow::Error),
}
