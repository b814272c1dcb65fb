/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    GlossText(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
