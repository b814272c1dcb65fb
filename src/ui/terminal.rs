use crate::app::{mode::AppMode, App, AppEvent};
use crate::ui::view::{
    render_command_deck, render_context_left, render_context_right, render_progress_bar,
    render_sign_display, render_status,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Poll interval while nothing is playing.
const IDLE_POLL_MS: u64 = 250;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped last so the terminal is restored after the final draw.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app reaches `AppMode::Quit`.
    ///
    /// While playing, the poll timeout is the current token's display time,
    /// so a timeout with no key pressed advances to the next sign.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            let timeout_ms = match app.mode() {
                AppMode::Playing => app.current_token_duration().max(1),
                _ => IDLE_POLL_MS,
            };

            if event::poll(Duration::from_millis(timeout_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key);
                    }
                }
            } else if app.mode() == AppMode::Playing {
                app.advance_playback();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Length(2),
                ])
                .split(area);

            let stage = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(rows[0])[1];

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(35),
                    Constraint::Percentage(30),
                    Constraint::Percentage(35),
                ])
                .split(stage);

            frame.render_widget(render_context_left(&state.context_left), columns[0]);
            if let Some(token) = &state.current {
                let sign = render_sign_display(token, state.current_is_marker, columns[1].width);
                frame.render_widget(sign, columns[1]);
            }
            frame.render_widget(render_context_right(&state.context_right), columns[2]);

            frame.render_widget(render_progress_bar(state.progress), rows[1]);
            frame.render_widget(
                render_status(state.status.as_deref(), state.source_text.as_deref()),
                rows[2],
            );
            frame.render_widget(
                render_command_deck(state.mode, &state.command_buffer, state.spm),
                rows[3],
            );
        })?;

        Ok(())
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode() {
        AppMode::Command => match key.code {
            KeyCode::Char(c) => app.push_command_char(c),
            KeyCode::Backspace => app.pop_command_char(),
            KeyCode::Enter => app.submit_command(),
            KeyCode::Esc => {
                if app.command_buffer.is_empty() {
                    app.handle_event(AppEvent::Quit);
                } else {
                    app.command_buffer.clear();
                }
            }
            _ => {}
        },
        AppMode::Playing | AppMode::Paused => match key.code {
            KeyCode::Char(c) => app.handle_keypress(c),
            KeyCode::Left => app.handle_keypress('h'),
            KeyCode::Right => app.handle_keypress('l'),
            KeyCode::Esc => app.enter_command_mode(),
            _ => {}
        },
        AppMode::Quit => {}
    }
}
