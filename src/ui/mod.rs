pub mod command;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::{command_to_app_event, parse_command, Command};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use view::{render_progress_bar, render_sign_display};
