//! Maps gloss candidates to playable units: whole signs from the catalog,
//! or finger-spelled letters when no clip exists.

use crate::gloss::catalog::AssetCatalog;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossKind {
    /// A whole word with its own clip.
    Sign,
    /// One finger-spelled character.
    Letter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossToken {
    pub text: String,
    pub kind: GlossKind,
}

impl GlossToken {
    pub fn sign(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: GlossKind::Sign,
        }
    }

    pub fn letter(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: GlossKind::Letter,
        }
    }

    pub fn is_letter(&self) -> bool {
        self.kind == GlossKind::Letter
    }
}

/// First character uppercased, the rest lowercased ("wALK" → "Walk").
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Resolves each word against `catalog`, spelling out the misses.
pub fn resolve(words: &[String], catalog: &dyn AssetCatalog, extension: &str) -> Vec<GlossToken> {
    let mut resolved = Vec::with_capacity(words.len());

    for word in words {
        let name = title_case(word);
        if catalog.exists(&format!("{}{}", name, extension)) {
            resolved.push(GlossToken::sign(name));
            continue;
        }

        trace!(word = %word, "no clip, finger-spelling");
        for c in word.chars().filter(|c| c.is_alphanumeric()) {
            resolved.push(GlossToken::letter(c.to_uppercase().collect::<String>()));
        }
    }

    resolved
}
