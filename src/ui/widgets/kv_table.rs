use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::{paint, Tone};

/// Two-column key/value rows with the keys padded to a shared width.
#[derive(Debug, Default, Clone)]
pub struct KeyValueTable {
    rows: Vec<(String, String)>,
}

impl KeyValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render one line per row, in insertion order.
    pub fn render_lines(&self, supports_color: bool) -> Vec<String> {
        let key_width = self.rows.iter().map(|(k, _)| k.width()).max().unwrap_or(0);

        self.rows
            .iter()
            .map(|(key, value)| {
                let pad = " ".repeat(key_width - key.width());
                format!(
                    "{}{}  {}",
                    paint(key, Tone::Dim, supports_color),
                    pad,
                    value
                )
            })
            .collect()
    }
}
