//! Part-of-speech tags and tagged tokens.
//!
//! The tag set is the Penn Treebank inventory plus `Punct` for punctuation
//! tokens and `Other` for anything a substituted tagger reports that we do
//! not recognise. Downstream stages only look at a handful of these: the
//! verb forms and `MD` drive tense inference, and the verb/adjective groups
//! pick the lemmatizer's reduction mode.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun
    WPS,
    /// Wh-adverb
    WRB,
    Punct,
    Other,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::CC => "CC",
            Tag::CD => "CD",
            Tag::DT => "DT",
            Tag::EX => "EX",
            Tag::FW => "FW",
            Tag::IN => "IN",
            Tag::JJ => "JJ",
            Tag::JJR => "JJR",
            Tag::JJS => "JJS",
            Tag::LS => "LS",
            Tag::MD => "MD",
            Tag::NN => "NN",
            Tag::NNS => "NNS",
            Tag::NNP => "NNP",
            Tag::NNPS => "NNPS",
            Tag::PDT => "PDT",
            Tag::POS => "POS",
            Tag::PRP => "PRP",
            Tag::PRPS => "PRP$",
            Tag::RB => "RB",
            Tag::RBR => "RBR",
            Tag::RBS => "RBS",
            Tag::RP => "RP",
            Tag::SYM => "SYM",
            Tag::TO => "TO",
            Tag::UH => "UH",
            Tag::VB => "VB",
            Tag::VBD => "VBD",
            Tag::VBG => "VBG",
            Tag::VBN => "VBN",
            Tag::VBP => "VBP",
            Tag::VBZ => "VBZ",
            Tag::WDT => "WDT",
            Tag::WP => "WP",
            Tag::WPS => "WP$",
            Tag::WRB => "WRB",
            Tag::Punct => ".",
            Tag::Other => "?",
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Tag::VB | Tag::VBD | Tag::VBG | Tag::VBN | Tag::VBP | Tag::VBZ
        )
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, Tag::NN | Tag::NNS | Tag::NNP | Tag::NNPS)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails: unrecognised spellings become `Tag::Other`, and any
/// run of punctuation characters (the way Treebank taggers tag `,` `.` `:`)
/// becomes `Tag::Punct`.
impl FromStr for Tag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "CC" => Tag::CC,
            "CD" => Tag::CD,
            "DT" => Tag::DT,
            "EX" => Tag::EX,
            "FW" => Tag::FW,
            "IN" => Tag::IN,
            "JJ" => Tag::JJ,
            "JJR" => Tag::JJR,
            "JJS" => Tag::JJS,
            "LS" => Tag::LS,
            "MD" => Tag::MD,
            "NN" => Tag::NN,
            "NNS" => Tag::NNS,
            "NNP" => Tag::NNP,
            "NNPS" => Tag::NNPS,
            "PDT" => Tag::PDT,
            "POS" => Tag::POS,
            "PRP" => Tag::PRP,
            "PRP$" => Tag::PRPS,
            "RB" => Tag::RB,
            "RBR" => Tag::RBR,
            "RBS" => Tag::RBS,
            "RP" => Tag::RP,
            "SYM" => Tag::SYM,
            "TO" => Tag::TO,
            "UH" => Tag::UH,
            "VB" => Tag::VB,
            "VBD" => Tag::VBD,
            "VBG" => Tag::VBG,
            "VBN" => Tag::VBN,
            "VBP" => Tag::VBP,
            "VBZ" => Tag::VBZ,
            "WDT" => Tag::WDT,
            "WP" => Tag::WP,
            "WP$" => Tag::WPS,
            "WRB" => Tag::WRB,
            other if !other.is_empty() && other.chars().all(|c| !c.is_alphanumeric()) => {
                Tag::Punct
            }
            _ => Tag::Other,
        };
        Ok(tag)
    }
}

/// A tagged token: the lowercased surface form and its part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub tag: Tag,
}

impl Token {
    pub fn new(surface: impl Into<String>, tag: Tag) -> Self {
        Self {
            surface: surface.into(),
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penn_spellings_parse_back() {
        for tag in [Tag::PRPS, Tag::WPS, Tag::VBG, Tag::MD, Tag::NN, Tag::JJS] {
            let parsed: Tag = tag.as_str().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_unknown_spelling_is_other() {
        let parsed: Tag = "XYZ".parse().unwrap();
        assert_eq!(parsed, Tag::Other);
    }

    #[test]
    fn test_punctuation_spellings_are_punct() {
        for spelling in [",", ".", ":", "``", "''", "("] {
            let parsed: Tag = spelling.parse().unwrap();
            assert_eq!(parsed, Tag::Punct, "spelling {:?}", spelling);
        }
    }

    #[test]
    fn test_verb_and_noun_groups() {
        assert!(Tag::VBN.is_verb());
        assert!(!Tag::MD.is_verb());
        assert!(Tag::NNS.is_noun());
        assert!(!Tag::JJ.is_noun());
    }
}
