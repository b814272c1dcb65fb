//! Dictionary-backed lemmatizer.
//!
//! Reduction follows the WordNet "morphy" procedure: a word that is already
//! a base form for the requested class is returned as is, irregular forms
//! come from exception tables, and regular forms are found by detaching a
//! suffix and checking the candidate against the lexicon. When nothing
//! matches the input is returned unchanged, which makes every mode
//! idempotent on canonical forms.
//!
//! Tagged words the lexicon has never seen get one more chance through
//! [`Lemmatizer::lemmatize_tagged`]: an inflectional tag (VBG, VBD, VBN,
//! VBZ, NNS) licenses stripping the regular suffix without a dictionary hit.

use crate::gloss::resources::{LanguageResources, WordClass};
use crate::gloss::tag::Tag;
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// How a word is reduced to its dictionary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionMode {
    Verb,
    Adjective,
    /// Default mode for every tag outside the verb and adjective groups.
    Noun,
}

impl ReductionMode {
    pub const ALL: [ReductionMode; 3] = [
        ReductionMode::Verb,
        ReductionMode::Adjective,
        ReductionMode::Noun,
    ];

    /// Singular nouns go through verb reduction so that deverbal nouns the
    /// tagger mislabels ("running" as NN) still collapse to the verb.
    pub fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::VBG | Tag::VBD | Tag::VBZ | Tag::VBN | Tag::NN => ReductionMode::Verb,
            Tag::JJ | Tag::JJR | Tag::JJS | Tag::RBR | Tag::RBS => ReductionMode::Adjective,
            _ => ReductionMode::Noun,
        }
    }

    fn word_class(self) -> WordClass {
        match self {
            ReductionMode::Verb => WordClass::Verb,
            ReductionMode::Adjective => WordClass::Adjective,
            ReductionMode::Noun => WordClass::Noun,
        }
    }

    fn detachment_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ReductionMode::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            ReductionMode::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ied", "y"),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            ReductionMode::Adjective => &[
                ("er", ""),
                ("est", ""),
                ("er", "e"),
                ("est", "e"),
                ("ier", "y"),
                ("iest", "y"),
            ],
        }
    }
}

/// Reduces a word to its canonical form under a reduction mode.
///
/// Implementations must return the input unchanged when it is already
/// canonical or cannot be reduced.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, mode: ReductionMode) -> String;

    /// Lemma for a tagged token. The default reduces in the tag's mode.
    fn lemmatize_tagged(&self, word: &str, tag: Tag) -> String {
        self.lemmatize(word, ReductionMode::for_tag(tag))
    }
}

lazy_static! {
    static ref NOUN_EXCEPTIONS: FxHashMap<&'static str, &'static str> = [
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("lives", "life"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("wolves", "wolf"),
        ("shelves", "shelf"),
    ]
    .into_iter()
    .collect();

    static ref ADJECTIVE_EXCEPTIONS: FxHashMap<&'static str, &'static str> = [
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("farther", "far"),
        ("farthest", "far"),
        ("further", "far"),
        ("furthest", "far"),
        ("less", "little"),
        ("least", "little"),
        ("more", "many"),
        ("most", "many"),
    ]
    .into_iter()
    .collect();
}

/// Clitic forms with a fixed lemma in every mode.
const CLITIC_LEMMAS: &[(&str, &str)] = &[("n't", "not")];

/// Morphy-style lemmatizer over [`LanguageResources`].
#[derive(Debug, Clone)]
pub struct MorphyLemmatizer {
    resources: Arc<LanguageResources>,
}

impl MorphyLemmatizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    fn exception(&self, word: &str, mode: ReductionMode) -> Option<String> {
        let base = match mode {
            ReductionMode::Verb => self.resources.base_of(word),
            ReductionMode::Noun => NOUN_EXCEPTIONS.get(word).copied(),
            ReductionMode::Adjective => ADJECTIVE_EXCEPTIONS.get(word).copied(),
        };
        base.map(str::to_string)
    }

    fn detach(&self, word: &str, mode: ReductionMode) -> Option<String> {
        let class = mode.word_class();

        for (suffix, replacement) in mode.detachment_rules() {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }

            let candidate = format!("{}{}", stem, replacement);
            if self.resources.has_class(&candidate, class) {
                return Some(candidate);
            }

            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    if self.resources.has_class(undoubled, class) {
                        return Some(undoubled.to_string());
                    }
                }
            }
        }

        None
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, mode: ReductionMode) -> String {
        if let Some((_, lemma)) = CLITIC_LEMMAS.iter().find(|(form, _)| *form == word) {
            return lemma.to_string();
        }

        if self.resources.has_class(word, mode.word_class()) {
            return word.to_string();
        }

        self.exception(word, mode)
            .or_else(|| self.detach(word, mode))
            .unwrap_or_else(|| word.to_string())
    }

    fn lemmatize_tagged(&self, word: &str, tag: Tag) -> String {
        let lemma = self.lemmatize(word, ReductionMode::for_tag(tag));
        let open_class = tag.is_verb() || tag.is_noun();
        if lemma != word || !open_class || self.resources.classes(word).is_some() {
            return lemma;
        }
        guess_regular_base(word, tag).unwrap_or(lemma)
    }
}

/// Base form of a regularly inflected word that is missing from the
/// lexicon. Only inflectional tags qualify.
fn guess_regular_base(word: &str, tag: Tag) -> Option<String> {
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    match tag {
        Tag::VBG => strip_verb_suffix(word, "ing"),
        Tag::VBD | Tag::VBN => match word.strip_suffix("ied") {
            Some(stem) if stem.len() >= 2 => Some(format!("{}y", stem)),
            _ => strip_verb_suffix(word, "ed"),
        },
        Tag::VBZ | Tag::NNS => strip_plural(word),
        _ => None,
    }
}

fn strip_verb_suffix(word: &str, suffix: &str) -> Option<String> {
    let stem = word.strip_suffix(suffix)?;
    if stem.len() < 3 {
        return None;
    }
    // "agreed" → "agree"
    if suffix == "ed" && stem.ends_with('e') {
        return Some(format!("{}e", stem));
    }
    if let Some(undoubled) = undouble(stem) {
        // "falling", "kissed" keep their double letter
        if !stem.ends_with(['l', 's', 'z', 'f']) {
            return Some(undoubled.to_string());
        }
    }
    if needs_silent_e(stem) {
        return Some(format!("{}e", stem));
    }
    Some(stem.to_string())
}

/// "bak" → "bake": one syllable ending consonant, vowel, consonant.
fn needs_silent_e(stem: &str) -> bool {
    let is_vowel = |c: char| "aeiou".contains(c);
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let syllables = chars.windows(2).filter(|w| !is_vowel(w[0]) && is_vowel(w[1])).count()
        + usize::from(is_vowel(chars[0]));
    syllables == 1
        && !is_vowel(chars[n - 3])
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 1])
        && !"wxy".contains(chars[n - 1])
}

fn strip_plural(word: &str) -> Option<String> {
    if word.len() < 4 || ["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{}y", stem));
        }
    }
    if ["sses", "shes", "ches", "xes", "zes"].iter().any(|end| word.ends_with(end)) {
        return Some(word[..word.len() - 2].to_string());
    }
    word.strip_suffix('s').map(str::to_string)
}

/// "runn" → "run", "bigg" → "big". Only doubled consonants qualify.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gloss::config::GlossConfig;
    use crate::gloss::resources;

    fn lemmatizer() -> MorphyLemmatizer {
        let resources = resources::load(&GlossConfig::default()).unwrap();
        MorphyLemmatizer::new(Arc::new(resources))
    }

    #[test]
    fn test_mode_for_tag_groups() {
        for tag in [Tag::VBG, Tag::VBD, Tag::VBZ, Tag::VBN, Tag::NN] {
            assert_eq!(ReductionMode::for_tag(tag), ReductionMode::Verb);
        }
        for tag in [Tag::JJ, Tag::JJR, Tag::JJS, Tag::RBR, Tag::RBS] {
            assert_eq!(ReductionMode::for_tag(tag), ReductionMode::Adjective);
        }
        for tag in [Tag::VB, Tag::VBP, Tag::NNS, Tag::RB, Tag::MD, Tag::Other] {
            assert_eq!(ReductionMode::for_tag(tag), ReductionMode::Noun);
        }
    }

    #[test]
    fn test_regular_verb_forms() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize("walked", ReductionMode::Verb), "walk");
        assert_eq!(lr.lemmatize("walks", ReductionMode::Verb), "walk");
        assert_eq!(lr.lemmatize("running", ReductionMode::Verb), "run");
        assert_eq!(lr.lemmatize("making", ReductionMode::Verb), "make");
        assert_eq!(lr.lemmatize("stopped", ReductionMode::Verb), "stop");
        assert_eq!(lr.lemmatize("tried", ReductionMode::Verb), "try");
        assert_eq!(lr.lemmatize("studies", ReductionMode::Verb), "study");
    }

    #[test]
    fn test_irregular_verb_forms() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize("went", ReductionMode::Verb), "go");
        assert_eq!(lr.lemmatize("written", ReductionMode::Verb), "write");
        assert_eq!(lr.lemmatize("taught", ReductionMode::Verb), "teach");
    }

    #[test]
    fn test_noun_forms() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize("schools", ReductionMode::Noun), "school");
        assert_eq!(lr.lemmatize("children", ReductionMode::Noun), "child");
        assert_eq!(lr.lemmatize("women", ReductionMode::Noun), "woman");
        assert_eq!(lr.lemmatize("cities", ReductionMode::Noun), "city");
        assert_eq!(lr.lemmatize("buses", ReductionMode::Noun), "bus");
    }

    #[test]
    fn test_adjective_forms() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize("bigger", ReductionMode::Adjective), "big");
        assert_eq!(lr.lemmatize("happiest", ReductionMode::Adjective), "happy");
        assert_eq!(lr.lemmatize("better", ReductionMode::Adjective), "good");
        assert_eq!(lr.lemmatize("nicer", ReductionMode::Adjective), "nice");
    }

    #[test]
    fn test_negation_clitic_in_every_mode() {
        let lr = lemmatizer();
        for mode in ReductionMode::ALL {
            assert_eq!(lr.lemmatize("n't", mode), "not");
        }
    }

    #[test]
    fn test_canonical_forms_are_fixed_points() {
        let lr = lemmatizer();
        let canonical = [
            "walk", "run", "school", "happy", "go", "home", "sing", "news", "glass", "always",
            "xyzzy", "101",
        ];
        for word in canonical {
            for mode in ReductionMode::ALL {
                assert_eq!(lr.lemmatize(word, mode), word, "{} in {:?}", word, mode);
            }
        }
    }

    #[test]
    fn test_lemmatize_is_idempotent_on_its_output() {
        let lr = lemmatizer();
        for word in ["walked", "running", "children", "bigger", "went", "studies"] {
            for mode in ReductionMode::ALL {
                let once = lr.lemmatize(word, mode);
                assert_eq!(lr.lemmatize(&once, mode), once, "{} in {:?}", word, mode);
            }
        }
    }

    #[test]
    fn test_unknown_inflections_fall_back_to_regular_rules() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize_tagged("climbing", Tag::VBG), "climb");
        assert_eq!(lr.lemmatize_tagged("baking", Tag::VBG), "bake");
        assert_eq!(lr.lemmatize_tagged("shopping", Tag::VBG), "shop");
        assert_eq!(lr.lemmatize_tagged("yelling", Tag::VBG), "yell");
        assert_eq!(lr.lemmatize_tagged("visited", Tag::VBD), "visit");
        assert_eq!(lr.lemmatize_tagged("agreed", Tag::VBD), "agree");
        assert_eq!(lr.lemmatize_tagged("hurried", Tag::VBN), "hurry");
        assert_eq!(lr.lemmatize_tagged("mountains", Tag::NNS), "mountain");
        assert_eq!(lr.lemmatize_tagged("fences", Tag::NNS), "fence");
        assert_eq!(lr.lemmatize_tagged("dishes", Tag::NNS), "dish");
        assert_eq!(lr.lemmatize_tagged("berries", Tag::NNS), "berry");
        assert_eq!(lr.lemmatize_tagged("climbs", Tag::VBZ), "climb");
    }

    #[test]
    fn test_fallback_needs_an_inflectional_tag() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize_tagged("climbing", Tag::NN), "climbing");
        assert_eq!(lr.lemmatize_tagged("mountains", Tag::NNP), "mountains");
        assert_eq!(lr.lemmatize_tagged("campus", Tag::NNS), "campus");
        assert_eq!(lr.lemmatize_tagged("glass", Tag::NNS), "glass");
        assert_eq!(lr.lemmatize_tagged("boring", Tag::JJ), "boring");
        assert_eq!(lr.lemmatize_tagged("pants", Tag::RB), "pants");
    }

    #[test]
    fn test_tagged_lexicon_words_match_mode_reduction() {
        let lr = lemmatizer();
        assert_eq!(lr.lemmatize_tagged("walked", Tag::VBD), "walk");
        assert_eq!(lr.lemmatize_tagged("went", Tag::VBD), "go");
        assert_eq!(lr.lemmatize_tagged("news", Tag::NNS), "news");
    }

    #[test]
    fn test_undouble_only_consonants() {
        assert_eq!(undouble("runn"), Some("run"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("a"), None);
    }
}
