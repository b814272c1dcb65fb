use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Whole signs
    pub sign: Color,
    /// Finger-spelled letters
    pub letter: Color,
    /// Tense markers
    pub marker: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            sign: Color::Rgb(158, 206, 106),    // #9ECE6A Green
            letter: Color::Rgb(224, 175, 104),  // #E0AF68 Amber
            marker: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn sign() -> Color {
        Theme::current().sign
    }
    pub fn letter() -> Color {
        Theme::current().letter
    }
    pub fn marker() -> Color {
        Theme::current().marker
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
