use crate::app::mode::AppMode;
use crate::gloss::resolver::{GlossKind, GlossToken};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const PROGRESS_WIDTH: usize = 20;

/// Columns of left padding that center `text` in `width` terminal cells.
pub fn centering_padding(text: &str, width: u16) -> usize {
    (width as usize).saturating_sub(text.width()) / 2
}

/// Colour and label for one gloss token on the sign stage.
pub fn sign_style(token: &GlossToken, is_marker: bool) -> Style {
    let color = if is_marker {
        colors::marker()
    } else {
        match token.kind {
            GlossKind::Sign => colors::sign(),
            GlossKind::Letter => colors::letter(),
        }
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// The current sign, centered within `width` cells.
///
/// Finger-spelled letters carry a `[x]` frame so a spelled word reads apart
/// from a one-letter sign.
pub fn render_sign_display(token: &GlossToken, is_marker: bool, width: u16) -> Paragraph<'static> {
    let label = match token.kind {
        GlossKind::Sign => token.text.clone(),
        GlossKind::Letter => format!("[{}]", token.text),
    };
    let padding = " ".repeat(centering_padding(&label, width));

    let line = Line::from(vec![
        Span::raw(padding),
        Span::styled(label, sign_style(token, is_marker)),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

/// Number of filled cells in the progress bar.
pub fn progress_fill(progress: (usize, usize)) -> usize {
    let (current, total) = progress;
    if total == 0 {
        return 0;
    }
    ((current + 1).min(total) * PROGRESS_WIDTH) / total
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let filled_len = progress_fill(progress);
    let empty_len = PROGRESS_WIDTH - filled_len;

    let spans = vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::text())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ];

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_context_left(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Right).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_context_right(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Left).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn mode_indicator(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Command => " COMMAND ",
        AppMode::Playing => " PLAYING ",
        AppMode::Paused => " PAUSED ",
        AppMode::Quit => " QUIT ",
    }
}

/// Bottom input line. Shows the typed buffer in Command mode and the speed otherwise.
pub fn render_command_deck(mode: AppMode, buffer: &str, spm: u32) -> Paragraph<'static> {
    let body = match mode {
        AppMode::Command => format!("> {}▏", buffer),
        _ => format!("{} spm | space pause | +/- speed | r restart | q back", spm),
    };

    let line = Line::from(vec![
        Span::styled("▌", Style::default().fg(colors::marker())),
        Span::styled(
            mode_indicator(mode),
            Style::default().fg(colors::background()).bg(colors::text()),
        ),
        Span::styled(format!(" {}", body), Style::default().fg(colors::text())),
    ]);

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_status(status: Option<&str>, source_text: Option<&str>) -> Paragraph<'static> {
    let mut lines = Vec::new();
    if let Some(source) = source_text {
        lines.push(Line::from(Span::styled(
            source.to_string(),
            Style::default().fg(colors::dimmed()),
        )));
    }
    if let Some(status) = status {
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(colors::text()),
        )));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_padding() {
        assert_eq!(centering_padding("Walk", 10), 3);
        assert_eq!(centering_padding("Walk", 2), 0);
        // wide glyphs take two cells each
        assert_eq!(centering_padding("手話", 10), 3);
    }

    #[test]
    fn test_progress_fill() {
        assert_eq!(progress_fill((0, 0)), 0);
        assert_eq!(progress_fill((0, 4)), 5);
        assert_eq!(progress_fill((1, 2)), PROGRESS_WIDTH);
        assert_eq!(progress_fill((9, 4)), PROGRESS_WIDTH);
    }

    #[test]
    fn test_sign_style_marker_wins() {
        let token = GlossToken::letter("T");
        assert_eq!(sign_style(&token, true).fg, Some(colors::marker()));
        assert_eq!(sign_style(&token, false).fg, Some(colors::letter()));
        assert_eq!(
            sign_style(&GlossToken::sign("Walk"), false).fg,
            Some(colors::sign())
        );
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(mode_indicator(AppMode::Playing), " PLAYING ");
        assert_eq!(mode_indicator(AppMode::Command), " COMMAND ");
    }

    #[test]
    fn test_render_widgets_build() {
        let _ = render_sign_display(&GlossToken::sign("Home"), false, 30);
        let _ = render_context_left(&["Before".to_string()]);
        let _ = render_context_right(&[]);
        let _ = render_command_deck(AppMode::Command, "@notes.txt", 60);
        let _ = render_status(Some("ready"), None);
    }
}
