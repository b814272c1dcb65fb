use super::{LoadError, LoadedDocument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from a PDF file using the pdf-extract crate.
///
/// Slide decks exported to PDF are the common case; the extracted text is
/// handed to the gloss pipeline as is.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::PdfParse(
            "No extractable text content found in PDF".to_string(),
        ));
    }

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path.display()),
    })
}
