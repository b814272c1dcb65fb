//! signgloss: English text to sign-language gloss, with a terminal player.

pub mod app;
pub mod gloss;
pub mod input;
pub mod playback;
pub mod ui;
