//! Text sources: documents and the clipboard, reduced to plain text.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("PPTX parse error: {0}")]
    PptxParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracted text plus a `kind:location` label for status lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod pptx;
pub mod text;

/// Loads a document, picking the loader from the file extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        Some("pptx") => pptx::load(path),
        Some("txt") | Some("md") | Some("text") => text::load(path),
        Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
        None => Err(LoadError::UnsupportedFormat(path.to_string())),
    }
}
