use crate::gloss::config::PlaybackConfig;
use crate::gloss::pipeline::GlossTrace;
use crate::gloss::resolver::{title_case, GlossKind, GlossToken};

pub fn signs_per_minute_to_milliseconds(spm: u32) -> u64 {
    60_000 / spm.max(1) as u64
}

/// A resolved gloss sequence with a playback cursor.
pub struct PlaybackState {
    pub tokens: Vec<GlossToken>,
    pub current_index: usize,
    pub spm: u32,
    /// Number of leading tokens that make up the tense marker.
    marker_len: usize,
    config: PlaybackConfig,
}

impl PlaybackState {
    pub fn new(tokens: Vec<GlossToken>, marker_len: usize, config: PlaybackConfig) -> Self {
        Self {
            tokens,
            current_index: 0,
            spm: config.signs_per_minute,
            marker_len,
            config,
        }
    }

    pub fn new_with_default_config(tokens: Vec<GlossToken>) -> Self {
        Self::new(tokens, 0, PlaybackConfig::default())
    }

    /// Builds playback from a pipeline run, locating the tense marker so it
    /// can be held longer.
    pub fn from_trace(trace: &GlossTrace, config: PlaybackConfig) -> Self {
        let marker_len = match trace.marker {
            Some(marker) => match trace.resolved.first() {
                Some(first) if first.kind == GlossKind::Sign && first.text == title_case(marker) => 1,
                _ => marker.chars().filter(|c| c.is_alphanumeric()).count(),
            },
            None => 0,
        };
        Self::new(trace.resolved.clone(), marker_len, config)
    }

    pub fn current_token(&self) -> Option<&GlossToken> {
        self.tokens.get(self.current_index)
    }

    pub fn is_marker(&self, index: usize) -> bool {
        index < self.marker_len
    }

    /// How long the current token stays on screen.
    pub fn current_token_duration(&self) -> u64 {
        let Some(token) = self.current_token() else {
            return 0;
        };

        let base_delay_ms = signs_per_minute_to_milliseconds(self.spm) as f64;
        let multiplier = if self.is_marker(self.current_index) {
            self.config.marker_multiplier
        } else if token.is_letter() {
            self.config.letter_multiplier
        } else {
            1.0
        };

        (base_delay_ms * multiplier) as u64
    }

    pub fn get_spm(&self) -> u32 {
        self.spm
    }

    pub fn adjust_speed(&mut self, delta: i32) {
        let new_spm = self.spm as i32 + delta;
        self.spm = new_spm.clamp(
            *self.config.spm_range.start() as i32,
            *self.config.spm_range.end() as i32,
        ) as u32;
    }

    pub fn advance(&mut self) {
        if self.current_index < self.tokens.len().saturating_sub(1) {
            self.current_index += 1;
        }
    }

    pub fn rewind(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.tokens.is_empty() || self.current_index + 1 >= self.tokens.len()
    }

    /// (current, total) for the progress bar.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index, self.tokens.len())
    }
}
