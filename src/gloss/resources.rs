//! Language resources: the base-form lexicon and the irregular verb table.
//!
//! Both tables are compiled into the binary and may be replaced by files
//! named in [`GlossConfig`]. The process-wide default is loaded exactly once
//! by [`init`]; the outcome (success or failure) is cached, so a failed load
//! is reported to every caller instead of being retried per request.

use crate::gloss::config::GlossConfig;
use crate::gloss::error::GlossError;
use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

const EMBEDDED_LEXICON: &str = include_str!("data/lexicon.txt");
const EMBEDDED_IRREGULAR_VERBS: &str = include_str!("data/irregular_verbs.txt");

const LEXICON: &str = "lexicon";
const IRREGULAR_VERBS: &str = "irregular verb table";

static READY: AtomicBool = AtomicBool::new(false);

lazy_static! {
    static ref DEFAULT_RESOURCES: Result<Arc<LanguageResources>, GlossError> = {
        let loaded = load(&GlossConfig::from_env()).map(Arc::new);
        match &loaded {
            Ok(_) => READY.store(true, Ordering::Release),
            Err(err) => warn!(error = %err, "language resources failed to load"),
        }
        loaded
    };
}

/// Loads the process-wide resources on first call and returns the cached
/// result afterwards.
pub fn init() -> Result<Arc<LanguageResources>, GlossError> {
    DEFAULT_RESOURCES.clone()
}

/// True once [`init`] has completed successfully.
pub fn is_ready() -> bool {
    READY.load(Ordering::Acquire)
}

/// Builds an independent resource set from `config` without touching the
/// process-wide instance.
pub fn load(config: &GlossConfig) -> Result<LanguageResources, GlossError> {
    let lexicon_text = read_source(LEXICON, config.lexicon_path.as_deref(), EMBEDDED_LEXICON)?;
    let verbs_text = read_source(
        IRREGULAR_VERBS,
        config.irregular_verbs_path.as_deref(),
        EMBEDDED_IRREGULAR_VERBS,
    )?;

    let resources = LanguageResources::parse(&lexicon_text, &verbs_text)?;
    info!(
        lexicon_entries = resources.lexicon.len(),
        irregular_verbs = resources.irregular_bases.len(),
        "language resources loaded"
    );
    Ok(resources)
}

fn read_source(resource: &str, path: Option<&Path>, embedded: &str) -> Result<String, GlossError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| GlossError::resource_init(resource, format!("{}: {}", path.display(), e))),
        None => Ok(embedded.to_string()),
    }
}

/// Open word classes a base form can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    fn bit(self) -> u8 {
        match self {
            WordClass::Noun => 0b0001,
            WordClass::Verb => 0b0010,
            WordClass::Adjective => 0b0100,
            WordClass::Adverb => 0b1000,
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(WordClass::Noun),
            "v" => Some(WordClass::Verb),
            "a" => Some(WordClass::Adjective),
            "r" => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

/// Set of [`WordClass`]es recorded for one lexicon entry. The first class
/// listed in the lexicon is the entry's primary reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordClasses {
    bits: u8,
    primary: Option<WordClass>,
}

impl WordClasses {
    pub fn contains(&self, class: WordClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn primary(&self) -> Option<WordClass> {
        self.primary
    }

    fn insert(&mut self, class: WordClass) {
        self.bits |= class.bit();
        self.primary.get_or_insert(class);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageResources {
    lexicon: FxHashMap<String, WordClasses>,
    irregular_bases: FxHashSet<String>,
    past_forms: FxHashMap<String, String>,
    participle_forms: FxHashMap<String, String>,
}

impl LanguageResources {
    /// Parses the two tables. Blank lines and `#` comments are ignored.
    pub fn parse(lexicon: &str, irregular_verbs: &str) -> Result<Self, GlossError> {
        let mut resources = Self::default();

        for (line_no, line) in data_lines(lexicon) {
            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default().to_lowercase();
            let mut classes = WordClasses::default();
            for code in fields {
                let class = WordClass::from_code(code).ok_or_else(|| GlossError::MalformedResource {
                    resource: LEXICON.to_string(),
                    line: line_no,
                    reason: format!("unknown word class '{}'", code),
                })?;
                classes.insert(class);
            }
            if classes.is_empty() {
                return Err(GlossError::MalformedResource {
                    resource: LEXICON.to_string(),
                    line: line_no,
                    reason: format!("'{}' has no word class", word),
                });
            }
            resources.lexicon.insert(word, classes);
        }

        for (line_no, line) in data_lines(irregular_verbs) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(GlossError::MalformedResource {
                    resource: IRREGULAR_VERBS.to_string(),
                    line: line_no,
                    reason: format!("expected 3 columns, found {}", fields.len()),
                });
            }
            let base = fields[0].to_lowercase();
            for past in alternates(fields[1]) {
                resources.past_forms.entry(past).or_insert_with(|| base.clone());
            }
            for participle in alternates(fields[2]) {
                resources
                    .participle_forms
                    .entry(participle)
                    .or_insert_with(|| base.clone());
            }
            resources.irregular_bases.insert(base);
        }

        Ok(resources)
    }

    pub fn classes(&self, word: &str) -> Option<WordClasses> {
        self.lexicon.get(word).copied()
    }

    pub fn has_class(&self, word: &str, class: WordClass) -> bool {
        self.classes(word).is_some_and(|c| c.contains(class))
    }

    pub fn is_irregular_past(&self, word: &str) -> bool {
        self.past_forms.contains_key(word)
    }

    pub fn is_irregular_participle(&self, word: &str) -> bool {
        self.participle_forms.contains_key(word)
    }

    /// Base form of an irregular past or participle ("went" → "go").
    pub fn base_of(&self, form: &str) -> Option<&str> {
        self.past_forms
            .get(form)
            .or_else(|| self.participle_forms.get(form))
            .map(String::as_str)
    }

    pub fn is_irregular_base(&self, word: &str) -> bool {
        self.irregular_bases.contains(word)
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn alternates(field: &str) -> Vec<String> {
    field
        .split('/')
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
        .collect()
}
