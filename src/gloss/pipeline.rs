//! The text-to-gloss pipeline.
//!
//! Stages run strictly in order: Tokenized → Tagged → Normalized →
//! TenseAdjusted → PronounAdjusted → Resolved. Each stage is a pure function
//! of the previous stage's output; the pipeline holds no per-call state and
//! can be shared across threads.

use crate::gloss::catalog::AssetCatalog;
use crate::gloss::config::GlossConfig;
use crate::gloss::error::GlossError;
use crate::gloss::lemmatizer::{Lemmatizer, MorphyLemmatizer};
use crate::gloss::normalizer::normalize;
use crate::gloss::pronoun::rewrite_pronouns;
use crate::gloss::resolver::{resolve, GlossToken};
use crate::gloss::resources;
use crate::gloss::tag::Token;
use crate::gloss::tagger::{LexiconTagger, Tagger};
use crate::gloss::tense::{apply_tense_marker, TagDistribution, Tense};
use crate::gloss::tokenizer::tokenize;
use std::sync::Arc;
use tracing::debug;

/// Every intermediate result of one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlossTrace {
    pub tokens: Vec<String>,
    pub tagged: Vec<Token>,
    pub normalized: Vec<String>,
    pub distribution: TagDistribution,
    /// `None` when the input was empty.
    pub tense: Option<Tense>,
    pub marker: Option<&'static str>,
    pub adjusted: Vec<String>,
    pub resolved: Vec<GlossToken>,
}

impl GlossTrace {
    /// The terminal output: sign names and spelled letters, in signing order.
    pub fn words(&self) -> Vec<String> {
        self.resolved.iter().map(|t| t.text.clone()).collect()
    }
}

#[derive(Clone)]
pub struct GlossPipeline {
    tagger: Arc<dyn Tagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
    catalog: Arc<dyn AssetCatalog>,
    config: GlossConfig,
}

impl GlossPipeline {
    /// Pipeline over the process-wide language resources. The first call in
    /// a process performs the one-time resource load.
    pub fn new(catalog: Arc<dyn AssetCatalog>) -> Result<Self, GlossError> {
        Self::with_config(catalog, GlossConfig::default())
    }

    /// Like [`GlossPipeline::new`], but resources named in `config` are
    /// loaded for this pipeline alone.
    pub fn with_config(
        catalog: Arc<dyn AssetCatalog>,
        config: GlossConfig,
    ) -> Result<Self, GlossError> {
        let resources = if config.lexicon_path.is_none() && config.irregular_verbs_path.is_none() {
            resources::init()?
        } else {
            Arc::new(resources::load(&config)?)
        };

        Ok(Self::with_components(
            Arc::new(LexiconTagger::new(resources.clone())),
            Arc::new(MorphyLemmatizer::new(resources)),
            catalog,
            config,
        ))
    }

    pub fn with_components(
        tagger: Arc<dyn Tagger>,
        lemmatizer: Arc<dyn Lemmatizer>,
        catalog: Arc<dyn AssetCatalog>,
        config: GlossConfig,
    ) -> Self {
        Self {
            tagger,
            lemmatizer,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &GlossConfig {
        &self.config
    }

    /// Converts `text` into gloss tokens. Empty input yields an empty list.
    pub fn transform(&self, text: &str) -> Vec<String> {
        self.trace(text).words()
    }

    /// Runs the pipeline and keeps every stage's output.
    pub fn trace(&self, text: &str) -> GlossTrace {
        let tokens = tokenize(text);
        debug!(stage = "tokenized", tokens = tokens.len());
        if tokens.is_empty() {
            return GlossTrace::default();
        }

        let tagged = self.tagger.tag(&tokens);
        debug!(stage = "tagged", tokens = tagged.len());

        let distribution = TagDistribution::from_tokens(&tagged);
        let normalized = normalize(&tagged, self.lemmatizer.as_ref());
        debug!(stage = "normalized", lemmas = normalized.len());

        let (with_marker, tense, marker) =
            apply_tense_marker(normalized.clone(), &distribution, &self.config.tense_precedence);
        debug!(stage = "tense_adjusted", tense = %tense, marker = ?marker);

        let adjusted = rewrite_pronouns(with_marker);
        debug!(stage = "pronoun_adjusted", words = adjusted.len());

        let resolved = resolve(&adjusted, self.catalog.as_ref(), &self.config.asset_extension);
        debug!(stage = "resolved", gloss_tokens = resolved.len());

        GlossTrace {
            tokens,
            tagged,
            normalized,
            distribution,
            tense: Some(tense),
            marker,
            adjusted,
            resolved,
        }
    }
}

/// One-shot conversion over the process-wide resources and default config.
pub fn text_to_gloss<C>(text: &str, catalog: C) -> Result<Vec<String>, GlossError>
where
    C: AssetCatalog + 'static,
{
    let pipeline = GlossPipeline::new(Arc::new(catalog))?;
    Ok(pipeline.transform(text))
}
