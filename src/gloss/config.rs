// Configuration for the gloss transformer and the sign player.
// Defaults follow the reference asset convention (".mp4" clips keyed by title-cased word).

use crate::gloss::tense::Tense;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Transformer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GlossConfig {
    /// Suffix appended to the title-cased word when asking the catalog (default ".mp4")
    pub asset_extension: String,

    /// Tie-break order when two tenses have the same count (first wins)
    pub tense_precedence: [Tense; 4],

    /// Replace the embedded base-form lexicon with this file
    pub lexicon_path: Option<PathBuf>,

    /// Replace the embedded irregular verb table with this file
    pub irregular_verbs_path: Option<PathBuf>,
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            asset_extension: ".mp4".to_string(),
            tense_precedence: Tense::DEFAULT_PRECEDENCE,
            lexicon_path: None,
            irregular_verbs_path: None,
        }
    }
}

impl GlossConfig {
    /// Defaults overridden by `SIGNGLOSS_ASSET_EXT`, `SIGNGLOSS_LEXICON` and
    /// `SIGNGLOSS_IRREGULAR_VERBS` when they are set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ext) = non_empty_var("SIGNGLOSS_ASSET_EXT") {
            config.asset_extension = if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            };
        }
        config.lexicon_path = non_empty_var("SIGNGLOSS_LEXICON").map(PathBuf::from);
        config.irregular_verbs_path =
            non_empty_var("SIGNGLOSS_IRREGULAR_VERBS").map(PathBuf::from);

        config
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Player timing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Whole signs shown per minute (default 60)
    pub signs_per_minute: u32,

    /// Minimum and maximum allowed speed
    pub spm_range: RangeInclusive<u32>,

    /// Finger-spelled letters play faster than whole signs (default 0.5x)
    pub letter_multiplier: f64,

    /// Tense markers linger so the time frame registers (default 1.5x)
    pub marker_multiplier: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            signs_per_minute: 60,
            spm_range: 20..=240,
            letter_multiplier: 0.5,
            marker_multiplier: 1.5,
        }
    }
}

/// Master configuration combining all signgloss settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub gloss: GlossConfig,
    pub playback: PlaybackConfig,
}
