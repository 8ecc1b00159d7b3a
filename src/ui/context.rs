use crate::config::{AnimationMode, ColorMode, Config};
use crate::presentation::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    /// Color for stdout (tables, results).
    pub color: bool,
    /// Color for stderr (progress, warnings, errors).
    pub stderr_color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_no_animation, config, caps)
    }

    pub fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = resolve_color(
            cli_color,
            config.output.color,
            caps.supports_color && !caps.is_ci,
        );
        let stderr_color = resolve_color(
            cli_color,
            config.output.color,
            caps.stderr_supports_color && !caps.is_ci,
        );

        // Log lines at -v share stderr with the spinner, so redraws would tear them.
        let animation = if json || cli_no_animation || verbose > 0 {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => true,
                AnimationMode::Auto => caps.stderr_tty && !caps.is_ci,
            }
        };

        Self {
            json,
            caps,
            color,
            stderr_color,
            unicode,
            animation,
        }
    }

    /// Plain context: no color, ASCII glyphs, no animation.
    pub fn plain() -> Self {
        Self {
            json: false,
            caps: TerminalCapabilities {
                stdout_tty: false,
                stderr_tty: false,
                supports_color: false,
                stderr_supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            stderr_color: false,
            unicode: false,
            animation: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Flag beats config; `auto` defers to what the stream supports.
fn resolve_color(cli_color: Option<ColorWhen>, config: ColorMode, auto: bool) -> bool {
    match cli_color {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => match config {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => auto,
        },
    }
}
