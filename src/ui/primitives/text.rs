use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Semantic tone of a piece of text; maps onto the five theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => theme::colors::SUCCESS,
            Tone::Error => theme::colors::ERROR,
            Tone::Warning => theme::colors::WARNING,
            Tone::Info => theme::colors::INFO,
            Tone::Dim => theme::colors::DIM,
        }
    }
}

/// Color `text` with `tone` when the terminal supports it.
pub fn paint(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(tone.color()))
}

/// Like [`paint`], but bold.
pub fn paint_bold(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(tone.color()).bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_returns_plain_text() {
        assert_eq!(paint("ok", Tone::Success, false), "ok");
        assert_eq!(paint_bold("ok", Tone::Info, false), "ok");
    }

    #[test]
    fn paint_with_color_includes_ansi_escape() {
        assert!(paint("no", Tone::Error, true).contains("\u{1b}["));
    }
}
