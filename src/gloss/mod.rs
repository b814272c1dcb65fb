//! Text-to-sign-gloss transformer.
//!
//! - **tokenizer**: lowercases and splits text into word and punctuation tokens
//! - **tagger**: assigns a part-of-speech tag to every token
//! - **normalizer**: drops stopwords and punctuation, lemmatizes the rest
//! - **tense**: picks the dominant tense and prepends its marker sign
//! - **pronoun**: rewrites first person singular to its sign name
//! - **resolver**: maps words to catalog signs or finger-spelled letters

pub mod catalog;
pub mod config;
pub mod error;
pub mod lemmatizer;
pub mod normalizer;
pub mod pipeline;
pub mod pronoun;
pub mod resolver;
pub mod resources;
pub mod tag;
pub mod tagger;
pub mod tense;
pub mod tokenizer;

pub use catalog::{AssetCatalog, DirectoryCatalog, MemoryCatalog};
pub use config::{Config, GlossConfig, PlaybackConfig};
pub use error::GlossError;
pub use lemmatizer::{Lemmatizer, MorphyLemmatizer, ReductionMode};
pub use pipeline::{text_to_gloss, GlossPipeline, GlossTrace};
pub use resolver::{GlossKind, GlossToken};
pub use tag::{Tag, Token};
pub use tagger::{FixedTagger, LexiconTagger, Tagger};
pub use tense::{TagDistribution, Tense};
