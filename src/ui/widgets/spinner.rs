use crate::ui::primitives::icon::Icon;

const FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// A single-line spinner: a rotating frame followed by a label.
///
/// The spinner only produces strings; the caller decides where and how often
/// they are drawn.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            FRAMES_BRAILLE
        } else {
            FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    pub fn succeed(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            message
        )
    }

    pub fn fail(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Deploying");
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Deploying");
        assert_eq!(s.render(false), "- Deploying");
    }

    #[test]
    fn tick_advances_and_wraps_frames() {
        let mut s = Spinner::new("Deploying");
        let first = s.render(false);
        s.tick();
        assert_ne!(first, s.render(false));
        for _ in 0..3 {
            s.tick();
        }
        assert_eq!(first, s.render(false));
    }

    #[test]
    fn succeed_and_fail_prefix_status_icon() {
        let s = Spinner::new("Deploying");
        assert_eq!(s.succeed("done", false, false), "[OK] done");
        assert_eq!(s.fail("broke", false, false), "[FAIL] broke");
    }
}
