use std::io::Write;

use crate::error::{ConfigError, DeployError};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint_bold, Tone};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Render an error (and its causes) as a failure panel.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let title = format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        paint_bold("ERROR", Tone::Error, supports_color)
    );
    let mut panel = Panel::with_title(title).style(PanelStyle::Error);
    panel.add_empty();
    panel.add_line(err.to_string());

    for cause in err.chain().skip(1) {
        panel.add_line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }

    if let Some(fix) = suggest_fix(err) {
        panel.add_empty();
        panel.add_line(format!("FIX: {}", fix));
    }

    panel.render(supports_color, supports_unicode)
}

fn suggest_fix(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return match deploy {
            DeployError::Session { .. } => {
                Some("Set a region with --region, OAM_ECS_REGION or AWS_REGION.")
            }
            DeployError::StackFailed { .. } => {
                Some("Inspect the stack events in the CloudFormation console, then re-run.")
            }
            DeployError::Timeout { .. } => {
                Some("Raise environment.timeout_secs or wait for the stack to settle.")
            }
            _ => None,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return Some("Fix the config file and try again.");
    }

    None
}

/// Report a command failure on stderr (or as a JSON event on stdout).
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = emit_event(&ErrorEvent::new(format!("{:#}", err)));
        return;
    }

    let mut stderr = std::io::stderr().lock();
    let _ = write_error(&mut stderr, err, ui);
}

/// Write the failure panel with the stderr color settings of `ui`.
pub fn write_error(out: &mut impl Write, err: &anyhow::Error, ui: &UiContext) -> std::io::Result<()> {
    out.write_all(format_error(err, ui.stderr_color, ui.unicode).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorMode, Config};
    use crate::presentation::cli::ColorWhen;
    use std::time::Duration;

    #[test]
    fn session_error_suggests_region() {
        let err = anyhow::Error::new(DeployError::Session {
            message: "no region".to_string(),
        });
        let rendered = format_error(&err, false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("failed to load AWS session: no region"));
        assert!(rendered.contains("FIX: Set a region"));
    }

    #[test]
    fn context_chain_is_listed() {
        let err = anyhow::Error::new(DeployError::StackNotFound {
            stack_name: "env".to_string(),
        })
        .context("deploying environment");
        let rendered = format_error(&err, false, false);

        assert!(rendered.contains("deploying environment"));
        assert!(rendered.contains("[>] stack env not found"));
    }

    #[test]
    fn color_never_writes_no_escape_codes() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ui = UiContext::new(false, 0, Some(ColorWhen::Never), false, &config);
        let err = anyhow::Error::new(DeployError::Timeout {
            stack_name: "env".to_string(),
            waited: Duration::from_secs(30),
        });

        let mut buf = Vec::new();
        write_error(&mut buf, &err, &ui).unwrap();

        let rendered = String::from_utf8(buf).unwrap();
        assert!(!rendered.contains('\u{1b}'), "{rendered:?}");
        assert!(rendered.contains("timed out after 30s waiting for stack env"));
    }

    #[test]
    fn stderr_color_paints_the_panel() {
        let ui = UiContext {
            stderr_color: true,
            ..UiContext::plain()
        };
        let err = anyhow::anyhow!("boom");

        let mut buf = Vec::new();
        write_error(&mut buf, &err, &ui).unwrap();

        assert!(String::from_utf8(buf).unwrap().contains("\u{1b}["));
    }

    #[test]
    fn unknown_errors_have_no_fix() {
        let err = anyhow::anyhow!("something else");
        let rendered = format_error(&err, false, true);
        assert!(!rendered.contains("FIX:"));
    }
}
