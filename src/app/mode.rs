/// Application modes.
///
/// `Command` is the command deck; `Playing` and `Paused` show the gloss player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    Playing,
    Paused,
    Quit,
}
