//! Stopword filtering and lemmatization.

use crate::gloss::lemmatizer::Lemmatizer;
use crate::gloss::tag::Token;
use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Function words dropped before glossing: auxiliaries, function pronouns,
/// conjunctions, determiners and contraction fragments.
pub const STOPWORDS: &[&str] = &[
    "mightn't", "re", "wasn", "wouldn", "be", "has", "that", "does", "shouldn", "do", "you've",
    "off", "for", "didn't", "m", "ain", "haven", "weren't", "are", "she's", "wasn't", "its",
    "haven't", "wouldn't", "don", "weren", "s", "you'd", "don't", "doesn", "hadn't", "is", "was",
    "that'll", "should've", "a", "then", "the", "mustn", "i", "nor", "as", "it's", "needn't", "d",
    "am", "have", "hasn", "o", "aren't", "you'll", "couldn't", "you're", "mustn't", "didn",
    "doesn't", "ll", "an", "hadn", "whom", "y", "hasn't", "itself", "couldn", "needn", "shan't",
    "isn", "been", "such", "shan", "shouldn't", "aren", "being", "were", "did", "ma", "t",
    "having", "mightn", "ve", "isn't", "won't",
    // clitic fragments as the tokenizer emits them
    "'s", "'re", "'ve", "'ll", "'d", "'m",
];

lazy_static! {
    static ref STOPWORD_SET: FxHashSet<&'static str> = STOPWORDS.iter().copied().collect();
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// A token with no alphanumeric character: `,` `...` `--` `''` and the like.
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// Drops stopwords and punctuation, then lemmatizes each survivor by its
/// tag. Order is preserved.
pub fn normalize(tagged: &[Token], lemmatizer: &dyn Lemmatizer) -> Vec<String> {
    tagged
        .iter()
        .filter(|token| !is_stopword(&token.surface) && !is_punctuation(&token.surface))
        .map(|token| lemmatizer.lemmatize_tagged(&token.surface, token.tag))
        .collect()
}
