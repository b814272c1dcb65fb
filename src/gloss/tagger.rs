//! Part-of-speech tagging.
//!
//! [`Tagger`] is the seam the pipeline depends on. The default
//! [`LexiconTagger`] is a deterministic rule tagger: a closed-class word
//! table, the irregular verb table, the base-form lexicon and suffix
//! heuristics propose a tag per token, then a left-to-right context pass
//! settles the ambiguous verb and noun readings.

use crate::gloss::resources::{LanguageResources, WordClass, WordClasses};
use crate::gloss::tag::{Tag, Token};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Assigns exactly one tag per token, preserving length and order.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<Token>;
}

lazy_static! {
    static ref CLOSED_CLASS: FxHashMap<&'static str, Tag> = {
        let mut table = FxHashMap::default();
        let groups: &[(Tag, &[&str])] = &[
            (Tag::DT, &["the", "a", "an", "this", "that", "these", "those", "every", "each",
                        "some", "any", "no", "another", "either", "neither"]),
            (Tag::PDT, &["all", "both", "half"]),
            (Tag::PRP, &["i", "you", "he", "she", "it", "we", "they", "me", "him", "us",
                         "them", "myself", "yourself", "himself", "herself", "itself",
                         "ourselves", "themselves"]),
            (Tag::PRPS, &["my", "your", "his", "her", "its", "our", "their"]),
            (Tag::TO, &["to"]),
            (Tag::IN, &["in", "on", "at", "of", "for", "with", "by", "from", "about", "into",
                        "over", "under", "after", "before", "between", "through", "during",
                        "without", "within", "than", "because", "if", "while", "although",
                        "since", "unless", "whether", "until", "against", "among", "off",
                        "near", "upon", "across", "behind", "like", "as"]),
            (Tag::CC, &["and", "or", "but", "nor", "yet", "so"]),
            (Tag::MD, &["will", "would", "shall", "should", "can", "could", "may", "might",
                        "must", "'ll", "'d", "wo", "ca", "sha"]),
            (Tag::RB, &["not", "n't", "now", "then", "here", "very", "too", "also", "always",
                        "never", "often", "soon", "again", "already", "still", "just", "only",
                        "sometimes", "usually", "really", "ago", "away", "maybe", "quite",
                        "almost", "even", "ever", "once", "later", "together", "there"]),
            (Tag::RBR, &["more", "less"]),
            (Tag::RBS, &["most", "least"]),
            (Tag::WDT, &["which", "whatever"]),
            (Tag::WP, &["what", "who", "whom"]),
            (Tag::WPS, &["whose"]),
            (Tag::WRB, &["when", "where", "why", "how"]),
            (Tag::UH, &["hello", "hi", "yes", "oh", "okay", "ok", "wow", "bye", "goodbye"]),
            (Tag::VB, &["be"]),
            (Tag::VBP, &["am", "are", "'re", "'m", "'ve"]),
            (Tag::VBZ, &["is", "has", "does"]),
            (Tag::VBD, &["was", "were", "had", "did"]),
            (Tag::VBN, &["been"]),
            (Tag::VBG, &["being", "having", "doing"]),
            (Tag::POS, &["'s"]),
        ];
        for (tag, words) in groups {
            for word in words.iter() {
                table.insert(*word, *tag);
            }
        }
        table
    };
}

const SUBJECT_PRONOUNS_3SG: &[&str] = &["he", "she", "it"];
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];
const BE_FORMS: &[&str] = &["be", "am", "is", "are", "was", "were", "been", "being", "'m", "'re"];
const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];

/// Rule-based tagger over [`LanguageResources`].
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    resources: Arc<LanguageResources>,
}

impl LexiconTagger {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Context-free first guess for a single token.
    fn initial_tag(&self, word: &str) -> Tag {
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return Tag::Punct;
        }
        if is_number(word) {
            return Tag::CD;
        }
        if let Some(tag) = CLOSED_CLASS.get(word) {
            return *tag;
        }
        // "read", "cut", "run": base forms that double as past forms stay base.
        if !self.resources.is_irregular_base(word) {
            if self.resources.is_irregular_past(word) {
                return Tag::VBD;
            }
            if self.resources.is_irregular_participle(word) {
                return Tag::VBN;
            }
        }
        if let Some(classes) = self.resources.classes(word) {
            return base_form_tag(classes);
        }
        self.suffix_tag(word)
    }

    fn suffix_tag(&self, word: &str) -> Tag {
        let len = word.chars().count();

        if len > 4 && word.ends_with("ing") {
            return Tag::VBG;
        }
        if len > 3 && word.ends_with("ed") {
            return Tag::VBD;
        }
        if len > 3 && word.ends_with("ly") {
            return Tag::RB;
        }
        if len > 4 && word.ends_with("est") && self.has_adjective_stem(word, "est") {
            return Tag::JJS;
        }
        if len > 3 && word.ends_with("er") && self.has_adjective_stem(word, "er") {
            return Tag::JJR;
        }
        if len > 2 && word.ends_with('s') && !word.ends_with("ss") {
            return self.plural_or_third_person(word);
        }
        for suffix in ["tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence"] {
            if word.ends_with(suffix) {
                return Tag::NN;
            }
        }
        for suffix in ["ous", "ful", "able", "ible", "ive", "ic", "less", "ish", "al"] {
            if len > suffix.len() + 1 && word.ends_with(suffix) {
                return Tag::JJ;
            }
        }
        Tag::NN
    }

    fn has_adjective_stem(&self, word: &str, suffix: &str) -> bool {
        let Some(stem) = word.strip_suffix(suffix) else {
            return false;
        };
        let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
        if let Some(y_stem) = stem.strip_suffix('i') {
            candidates.push(format!("{}y", y_stem));
        }
        let chars: Vec<char> = stem.chars().collect();
        if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
            candidates.push(chars[..chars.len() - 1].iter().collect());
        }
        candidates
            .iter()
            .any(|c| self.resources.has_class(c, WordClass::Adjective))
    }

    /// "-s" words: verbs-only stems read as VBZ, everything else as NNS.
    fn plural_or_third_person(&self, word: &str) -> Tag {
        let stems = [
            word.strip_suffix("ies").map(|s| format!("{}y", s)),
            word.strip_suffix("es").map(str::to_string),
            word.strip_suffix('s').map(str::to_string),
        ];
        for stem in stems.into_iter().flatten() {
            if let Some(classes) = self.resources.classes(&stem) {
                if classes.contains(WordClass::Verb) && !classes.contains(WordClass::Noun) {
                    return Tag::VBZ;
                }
                return Tag::NNS;
            }
        }
        Tag::NNS
    }

    /// Second pass: resolve readings that depend on the previous token.
    fn apply_context(&self, tokens: &mut [Token]) {
        for i in 1..tokens.len() {
            let (before, rest) = tokens.split_at_mut(i);
            let prev = &before[i - 1];
            let current = &mut rest[0];
            let classes = self.resources.classes(&current.surface);
            let is_base = self.resources.is_irregular_base(&current.surface);
            let can_be_verb = is_base || classes.is_some_and(|c| c.contains(WordClass::Verb));
            let prefers_verb = is_base
                || classes.is_some_and(|c| {
                    c.primary() == Some(WordClass::Verb) || !c.contains(WordClass::Noun)
                }) && can_be_verb;

            match prev.tag {
                // "to walk", "will go"; "to school" keeps its noun reading.
                Tag::TO | Tag::MD if prefers_verb && current.tag != Tag::VB => {
                    current.tag = Tag::VB;
                }
                Tag::PRP if can_be_verb && matches!(current.tag, Tag::NN | Tag::VB) => {
                    current.tag = if SUBJECT_PRONOUNS_3SG.contains(&prev.surface.as_str()) {
                        Tag::VBZ
                    } else if SUBJECT_PRONOUNS.contains(&prev.surface.as_str()) {
                        Tag::VBP
                    } else {
                        current.tag
                    };
                }
                Tag::PRP if current.tag == Tag::NNS
                    && SUBJECT_PRONOUNS_3SG.contains(&prev.surface.as_str()) =>
                {
                    current.tag = Tag::VBZ;
                }
                Tag::DT | Tag::PRPS | Tag::JJ | Tag::POS
                    if matches!(current.tag, Tag::VB | Tag::VBP) =>
                {
                    current.tag = Tag::NN;
                }
                _ => {}
            }

            // Past forms after be/have read as participles ("has walked", "was taken").
            let prev_word = before[i - 1].surface.as_str();
            if current.tag == Tag::VBD
                && (BE_FORMS.contains(&prev_word) || HAVE_FORMS.contains(&prev_word))
            {
                current.tag = Tag::VBN;
            }
        }

        let has_followers = tokens.len() > 1;
        if let Some(first) = tokens.first_mut() {
            if first.surface == "there" && has_followers {
                first.tag = Tag::EX;
            }
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<Token> {
        let mut tagged: Vec<Token> = tokens
            .iter()
            .map(|word| Token::new(word.clone(), self.initial_tag(word)))
            .collect();
        self.apply_context(&mut tagged);
        tagged
    }
}

/// Most likely tag for an uninflected lexicon entry seen without context.
fn base_form_tag(classes: WordClasses) -> Tag {
    match classes.primary() {
        Some(WordClass::Noun) => Tag::NN,
        Some(WordClass::Verb) => Tag::VB,
        Some(WordClass::Adjective) => Tag::JJ,
        Some(WordClass::Adverb) => Tag::RB,
        None => Tag::NN,
    }
}

fn is_number(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Tagger backed by a fixed word → tag table, for tests and callers that
/// already know the tags. Unlisted words get the fallback tag.
#[derive(Debug, Clone)]
pub struct FixedTagger {
    tags: FxHashMap<String, Tag>,
    fallback: Tag,
}

impl FixedTagger {
    pub fn new<I, S>(entries: I, fallback: Tag) -> Self
    where
        I: IntoIterator<Item = (S, Tag)>,
        S: Into<String>,
    {
        Self {
            tags: entries.into_iter().map(|(w, t)| (w.into(), t)).collect(),
            fallback,
        }
    }
}

impl Tagger for FixedTagger {
    fn tag(&self, tokens: &[String]) -> Vec<Token> {
        tokens
            .iter()
            .map(|word| Token::new(word.clone(), *self.tags.get(word).unwrap_or(&self.fallback)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gloss::config::GlossConfig;
    use crate::gloss::resources;
    use crate::gloss::tokenizer::tokenize;

    fn tags_for(text: &str) -> Vec<Tag> {
        let resources = Arc::new(resources::load(&GlossConfig::default()).unwrap());
        let tagger = LexiconTagger::new(resources);
        tagger.tag(&tokenize(text)).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_tag_past_sentence() {
        assert_eq!(
            tags_for("I walked to school"),
            vec![Tag::PRP, Tag::VBD, Tag::TO, Tag::NN]
        );
    }

    #[test]
    fn test_tag_future_sentence() {
        assert_eq!(
            tags_for("I will go home"),
            vec![Tag::PRP, Tag::MD, Tag::VB, Tag::NN]
        );
    }

    #[test]
    fn test_tag_continuous_sentence() {
        assert_eq!(
            tags_for("I am running now"),
            vec![Tag::PRP, Tag::VBP, Tag::VBG, Tag::RB]
        );
    }

    #[test]
    fn test_tag_third_person_present() {
        assert_eq!(tags_for("she walks"), vec![Tag::PRP, Tag::VBZ]);
    }

    #[test]
    fn test_tag_plural_after_determiner() {
        assert_eq!(tags_for("the books"), vec![Tag::DT, Tag::NNS]);
    }

    #[test]
    fn test_tag_participle_after_have() {
        assert_eq!(
            tags_for("we have walked"),
            vec![Tag::PRP, Tag::VBP, Tag::VBN]
        );
    }

    #[test]
    fn test_tag_irregular_past() {
        assert_eq!(tags_for("they went"), vec![Tag::PRP, Tag::VBD]);
    }

    #[test]
    fn test_tag_punctuation_and_numbers() {
        assert_eq!(tags_for("42 ,"), vec![Tag::CD, Tag::Punct]);
    }

    #[test]
    fn test_tag_comparative_adjective() {
        assert_eq!(tags_for("bigger"), vec![Tag::JJR]);
    }

    #[test]
    fn test_tag_base_form_after_modal() {
        assert_eq!(
            tags_for("you will read"),
            vec![Tag::PRP, Tag::MD, Tag::VB]
        );
    }

    #[test]
    fn test_tag_irregular_base_in_present() {
        assert_eq!(tags_for("they come"), vec![Tag::PRP, Tag::VBP]);
    }

    #[test]
    fn test_tag_leading_there_is_existential() {
        assert_eq!(tags_for("there is"), vec![Tag::EX, Tag::VBZ]);
        assert_eq!(tags_for("there"), vec![Tag::RB]);
    }

    #[test]
    fn test_tag_preserves_length() {
        let tokens = tokenize("xyzzy plugh, frobozz!");
        let resources = Arc::new(resources::load(&GlossConfig::default()).unwrap());
        let tagged = LexiconTagger::new(resources).tag(&tokens);
        assert_eq!(tagged.len(), tokens.len());
        for (token, tagged) in tokens.iter().zip(&tagged) {
            assert_eq!(token, &tagged.surface);
        }
    }

    #[test]
    fn test_fixed_tagger_fallback() {
        let tagger = FixedTagger::new([("walked", Tag::VBD)], Tag::NN);
        let tagged = tagger.tag(&["walked".to_string(), "cat".to_string()]);
        assert_eq!(tagged[0].tag, Tag::VBD);
        assert_eq!(tagged[1].tag, Tag::NN);
    }
}
