//! Word tokenizer.
//!
//! Lowercases the input and splits it on Unicode word boundaries. Whitespace
//! is dropped, every punctuation segment becomes its own token, and English
//! clitics are split off Treebank-style ("didn't" → "did", "n't").

use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off a word, longest first so "n't" wins over "'t".
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Negations whose stem is not the bare prefix.
const IRREGULAR_NEGATIONS: &[(&str, &str)] = &[("won't", "will"), ("can't", "can"), ("shan't", "shall")];

/// Tokenizes `text` into lowercased word and punctuation tokens, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = normalize_apostrophes(&text.to_lowercase());
    let mut tokens = Vec::new();

    for segment in lowered.split_word_bounds() {
        if segment.trim().is_empty() {
            continue;
        }
        split_clitics(segment, &mut tokens);
    }

    tokens
}

/// Curly apostrophes are folded so "don’t" splits like "don't".
fn normalize_apostrophes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    if let Some((_, stem)) = IRREGULAR_NEGATIONS.iter().find(|(form, _)| *form == word) {
        out.push(stem.to_string());
        out.push("n't".to_string());
        return;
    }

    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(clitic) {
            if !stem.is_empty() && stem.chars().any(|c| c.is_alphanumeric()) {
                out.push(stem.to_string());
                out.push(clitic.to_string());
                return;
            }
        }
    }

    out.push(word.to_string());
}
