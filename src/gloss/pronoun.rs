//! Pronoun rewrite: first person "I" becomes the "Me" sign.

/// First person singular as it appears in the gloss lexicon.
const FIRST_PERSON: &str = "I";
const FIRST_PERSON_SIGN: &str = "Me";

/// Replaces every exact "I" with "Me". Matching is case-sensitive.
pub fn rewrite_pronouns(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| {
            if w == FIRST_PERSON {
                FIRST_PERSON_SIGN.to_string()
            } else {
                w
            }
        })
        .collect()
}
