use std::io::Write;

use crate::config::ConfigWarning;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

/// Print unknown-key warnings from the config file to stderr.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json || warnings.is_empty() {
        return;
    }
    let mut err = std::io::stderr().lock();
    let _ = write_config_warnings(&mut err, warnings, ui);
}

pub fn write_config_warnings(
    out: &mut impl Write,
    warnings: &[ConfigWarning],
    ui: &UiContext,
) -> std::io::Result<()> {
    let icon = Icon::Warning.colored(ui.stderr_color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(
                out,
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            )?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(
                out,
                "   {} Did you mean '{}'?",
                Icon::Arrow.colored(ui.stderr_color, ui.unicode),
                paint(suggestion, Tone::Info, ui.stderr_color)
            )?;
        }
    }
    Ok(())
}
