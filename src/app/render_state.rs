use crate::app::mode::AppMode;
use crate::gloss::resolver::GlossToken;
use crate::playback::PlaybackState;

/// Number of gloss tokens shown on each side of the current one.
const CONTEXT_WINDOW: usize = 3;

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub current: Option<GlossToken>,
    pub current_is_marker: bool,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    pub progress: (usize, usize),
    pub spm: u32,
    pub command_buffer: String,
    pub status: Option<String>,
    pub source_text: Option<String>,
}

impl RenderState {
    /// Render state when nothing has been glossed yet
    pub fn empty(mode: AppMode, command_buffer: String, status: Option<String>) -> Self {
        Self {
            mode,
            current: None,
            current_is_marker: false,
            context_left: vec![],
            context_right: vec![],
            progress: (0, 0),
            spm: 0,
            command_buffer,
            status,
            source_text: None,
        }
    }

    pub fn from_playback(
        mode: AppMode,
        playback: &PlaybackState,
        command_buffer: String,
        status: Option<String>,
        source_text: Option<String>,
    ) -> Self {
        let tokens = &playback.tokens;
        let current_index = playback.current_index;

        let start = current_index.saturating_sub(CONTEXT_WINDOW);
        let context_left = tokens[start..current_index.min(tokens.len())]
            .iter()
            .map(|t| t.text.clone())
            .collect();

        let end = (current_index + CONTEXT_WINDOW + 1).min(tokens.len());
        let context_right = tokens
            .get(current_index + 1..end)
            .unwrap_or_default()
            .iter()
            .map(|t| t.text.clone())
            .collect();

        Self {
            mode,
            current: playback.current_token().cloned(),
            current_is_marker: playback.is_marker(current_index),
            context_left,
            context_right,
            progress: playback.progress(),
            spm: playback.get_spm(),
            command_buffer,
            status,
            source_text,
        }
    }
}
