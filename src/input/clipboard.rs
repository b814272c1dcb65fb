use super::{LoadError, LoadedDocument};

/// Load the current clipboard text.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("clipboard holds no text".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
