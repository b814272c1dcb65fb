use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, RenderState};
use crate::gloss::catalog::MemoryCatalog;
use crate::gloss::config::PlaybackConfig;
use crate::gloss::pipeline::GlossPipeline;
use std::sync::Arc;

fn app() -> App {
    let catalog = MemoryCatalog::from_names(["Before", "Walk", "School"], ".mp4");
    let pipeline = GlossPipeline::new(Arc::new(catalog)).unwrap();
    App::new(pipeline, PlaybackConfig::default())
}

#[test]
fn test_app_starts_in_command_mode() {
    let app = app();
    assert_eq!(app.mode(), AppMode::Command);
    assert!(app.playback.is_none());
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_app_gloss_text_starts_playback() {
    let mut app = app();
    app.handle_event(AppEvent::GlossText("I walked to school".to_string()));
    assert_eq!(app.mode, AppMode::Playing);
    let playback = app.playback.as_ref().unwrap();
    assert_eq!(playback.current_token().unwrap().text, "Before");
    assert!(playback.is_marker(0));
}

#[test]
fn test_app_empty_text_stays_in_command_mode() {
    let mut app = app();
    app.handle_event(AppEvent::GlossText("  , . ".to_string()));
    assert_eq!(app.mode, AppMode::Command);
    assert!(app.status.unwrap().contains("nothing to sign"));
}

#[test]
fn test_app_submit_command_from_buffer() {
    let mut app = app();
    for c in ":q".chars() {
        app.push_command_char(c);
    }
    app.submit_command();
    assert_eq!(app.mode, AppMode::Quit);
    assert!(app.command_buffer.is_empty());
}

#[test]
fn test_app_load_missing_file_reports_status() {
    let mut app = app();
    app.handle_event(AppEvent::LoadFile("/nonexistent/notes.txt".to_string()));
    assert_eq!(app.mode, AppMode::Command);
    assert!(app.status.unwrap().contains("File not found"));
}

#[test]
fn test_app_playback_runs_to_pause() {
    let mut app = app();
    app.handle_event(AppEvent::GlossText("walk".to_string()));
    app.advance_playback();
    assert_eq!(app.mode, AppMode::Paused);
}

#[test]
fn test_app_toggle_pause_and_back_to_command() {
    let mut app = app();
    app.handle_event(AppEvent::GlossText("I walked to school".to_string()));
    app.handle_keypress(' ');
    assert_eq!(app.mode, AppMode::Paused);
    app.handle_keypress(' ');
    assert_eq!(app.mode, AppMode::Playing);
    app.handle_keypress('q');
    assert_eq!(app.mode, AppMode::Command);
}

#[test]
fn test_app_get_render_state_initial() {
    let app = app();
    let state: RenderState = app.get_render_state();
    assert_eq!(state.mode, AppMode::Command);
    assert!(state.current.is_none());
}
