use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::gloss::config::PlaybackConfig;
use crate::gloss::pipeline::GlossPipeline;
use crate::input::{self, LoadedDocument};
use crate::playback::PlaybackState;
use crate::ui::command::{command_to_app_event, parse_command};
use tracing::{info, warn};

pub const HELP_TEXT: &str =
    "type text to sign it | @file.pptx/.pdf/.epub/.txt load a document | @@ clipboard | :q quit";

const SPEED_STEP: i32 = 10;

pub struct App {
    pub mode: AppMode,
    pub playback: Option<PlaybackState>,
    pub command_buffer: String,
    pub status: Option<String>,
    /// Text that produced the current playback, for the context line.
    pub source_text: Option<String>,
    pipeline: GlossPipeline,
    playback_config: PlaybackConfig,
}

impl App {
    pub fn new(pipeline: GlossPipeline, playback_config: PlaybackConfig) -> Self {
        Self {
            mode: AppMode::Command,
            playback: None,
            command_buffer: String::new(),
            status: Some(HELP_TEXT.to_string()),
            source_text: None,
            pipeline,
            playback_config,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::GlossText(text) => self.start_playback(&text, "input".to_string()),
            AppEvent::LoadFile(path) => {
                let loaded = input::load_path(&path);
                self.handle_loaded(loaded);
            }
            AppEvent::LoadClipboard => {
                let loaded = input::clipboard::load();
                self.handle_loaded(loaded);
            }
            AppEvent::InvalidCommand(command) => {
                self.status = Some(format!("unknown command: {}", command));
            }
            AppEvent::None => {}
        }
    }

    fn handle_loaded(&mut self, loaded: Result<LoadedDocument, input::LoadError>) {
        match loaded {
            Ok(doc) => self.start_playback(&doc.text, doc.source),
            Err(err) => {
                warn!(error = %err, "document load failed");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Glosses `text` and starts playing it.
    pub fn start_playback(&mut self, text: &str, source: String) {
        let trace = self.pipeline.trace(text);
        if trace.resolved.is_empty() {
            self.status = Some(format!("{}: nothing to sign", source));
            return;
        }

        info!(source = %source, gloss_tokens = trace.resolved.len(), "playback started");
        self.status = Some(format!("{} | {} signs", source, trace.resolved.len()));
        self.playback = Some(PlaybackState::from_trace(&trace, self.playback_config.clone()));
        self.source_text = Some(text.trim().to_string());
        self.mode = AppMode::Playing;
    }

    pub fn push_command_char(&mut self, c: char) {
        self.command_buffer.push(c);
    }

    pub fn pop_command_char(&mut self) {
        self.command_buffer.pop();
    }

    /// Parses and runs the command deck buffer.
    pub fn submit_command(&mut self) {
        let line = std::mem::take(&mut self.command_buffer);
        let event = command_to_app_event(parse_command(&line));
        self.handle_event(event);
    }

    /// Keys while the player is visible.
    pub fn handle_keypress(&mut self, c: char) {
        match c {
            ' ' => self.toggle_pause(),
            '+' | '=' => self.adjust_speed(SPEED_STEP),
            '-' => self.adjust_speed(-SPEED_STEP),
            'r' => {
                if let Some(playback) = self.playback.as_mut() {
                    playback.restart();
                }
                self.mode = AppMode::Playing;
            }
            'h' => {
                if let Some(playback) = self.playback.as_mut() {
                    playback.rewind();
                }
            }
            'l' => {
                if let Some(playback) = self.playback.as_mut() {
                    playback.advance();
                }
            }
            'q' => self.enter_command_mode(),
            _ => {}
        }
    }

    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command;
    }

    pub fn toggle_pause(&mut self) {
        match self.mode {
            AppMode::Playing => self.mode = AppMode::Paused,
            AppMode::Paused => self.mode = AppMode::Playing,
            _ => {}
        }
    }

    fn adjust_speed(&mut self, delta: i32) {
        if let Some(playback) = self.playback.as_mut() {
            playback.adjust_speed(delta);
        }
    }

    /// Called when the current token's display time is up.
    pub fn advance_playback(&mut self) {
        if self.mode != AppMode::Playing {
            return;
        }
        if let Some(playback) = self.playback.as_mut() {
            if playback.is_finished() {
                self.mode = AppMode::Paused;
            } else {
                playback.advance();
            }
        }
    }

    /// Display time of the current token, used as the event-poll timeout.
    pub fn current_token_duration(&self) -> u64 {
        self.playback
            .as_ref()
            .map(PlaybackState::current_token_duration)
            .unwrap_or(0)
    }

    pub fn get_render_state(&self) -> RenderState {
        match &self.playback {
            Some(playback) => RenderState::from_playback(
                self.mode,
                playback,
                self.command_buffer.clone(),
                self.status.clone(),
                self.source_text.clone(),
            ),
            None => RenderState::empty(self.mode, self.command_buffer.clone(), self.status.clone()),
        }
    }
}
