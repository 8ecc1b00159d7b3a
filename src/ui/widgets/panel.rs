use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::{paint, Tone};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl PanelStyle {
    fn tone(self) -> Tone {
        match self {
            PanelStyle::Info => Tone::Info,
            PanelStyle::Success => Tone::Success,
            PanelStyle::Warning => Tone::Warning,
            PanelStyle::Error => Tone::Error,
        }
    }
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

/// A bordered block of lines with an optional title row.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    rows: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.rows.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let b = Borders::for_terminal(supports_unicode);
        let tone = self.style.tone();

        let lines: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.rows.iter().map(String::as_str))
            .collect();

        // One space of padding on each side of the widest line.
        let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2;
        let rule = b.horizontal.repeat(inner);
        let edge = paint(b.vertical, tone, supports_color);

        let mut out = String::new();
        out.push_str(&paint(
            &format!("{}{}{}", b.top_left, rule, b.top_right),
            tone,
            supports_color,
        ));
        out.push('\n');

        for line in lines {
            let pad = inner - 1 - visible_width(line);
            out.push_str(&edge);
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&edge);
            out.push('\n');
        }

        out.push_str(&paint(
            &format!("{}{}{}", b.bottom_left, rule, b.bottom_right),
            tone,
            supports_color,
        ));
        out.push('\n');
        out
    }
}

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // ESC [ ... <final byte>
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_splits_multiline_content_into_rows() {
        let mut p = Panel::with_title("TITLE");
        p.add_line("Line1\nLine2");
        let rendered = p.render(false, true);

        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with(theme::borders::VERTICAL));
        assert!(line2.ends_with(theme::borders::VERTICAL));
    }

    #[test]
    fn panel_rows_share_one_width() {
        let mut p = Panel::with_title("short");
        p.add_line("a considerably longer line");
        let rendered = p.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }

    #[test]
    fn visible_width_ignores_color_codes() {
        let colored = paint("abc", Tone::Success, true);
        assert_eq!(visible_width(&colored), 3);
    }
}
