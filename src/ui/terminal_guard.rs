use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::any::Any;
use std::io;
use std::sync::Once;
use tracing::error;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode plus the alternate screen for as long as the player is up.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;

        install_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Restores the terminal before the panic message is printed, so the
/// message lands on the normal screen, and records it in the log.
fn install_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            let location = info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_default();
            error!(location = %location, "player panicked: {}", panic_text(info.payload()));
            previous(info);
        }));
    });
}

/// Message carried by a panic payload, if it is a string.
fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_text_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("lexicon vanished");
        assert_eq!(panic_text(payload.as_ref()), "lexicon vanished");
    }

    #[test]
    fn test_panic_text_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(format!("sign {} missing", 3));
        assert_eq!(panic_text(payload.as_ref()), "sign 3 missing");
    }

    #[test]
    fn test_panic_text_from_other_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_text(payload.as_ref()), "non-string panic payload");
    }

    #[test]
    fn test_panic_text_from_caught_panic() {
        let caught = std::panic::catch_unwind(|| panic!("gloss {}", "overflow")).unwrap_err();
        assert_eq!(panic_text(caught.as_ref()), "gloss overflow");
    }
}
