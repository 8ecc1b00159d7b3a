use crate::domain::entities::Environment;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, paint_bold, Tone};
use crate::ui::widgets::kv_table::KeyValueTable;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Render the stack outputs of a deployed environment, keys sorted.
pub fn render_environment(
    env: &Environment,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = format!(
        "{} Stack {}",
        Icon::Deploy.colored(supports_color, supports_unicode),
        paint_bold(env.stack_name(), Tone::Info, supports_color)
    );
    let mut panel = Panel::with_title(title).style(PanelStyle::Success);
    panel.add_empty();

    let mut table = KeyValueTable::new();
    for (key, value) in env.outputs() {
        table.add_row(key.as_str(), value.as_str());
    }

    if table.is_empty() {
        panel.add_line(paint("No stack outputs.", Tone::Dim, supports_color));
    } else {
        for line in table.render_lines(supports_color) {
            panel.add_line(line);
        }
    }

    panel.render(supports_color, supports_unicode)
}

/// Render the success line reporting where a dry run wrote the template.
pub fn render_dry_run(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Environment {
        Environment::new("oam-ecs-environment")
            .with_outputs([("VpcId", "vpc-123"), ("ClusterName", "oam-ecs-cluster")])
    }

    #[test]
    fn environment_table_ascii() {
        let rendered = render_environment(&sample(), false, false);
        insta::assert_snapshot!(rendered, @r"
        +------------------------------------+
        | [DEPLOY] Stack oam-ecs-environment |
        |                                    |
        | ClusterName  oam-ecs-cluster       |
        | VpcId        vpc-123               |
        +------------------------------------+
        ");
    }

    #[test]
    fn environment_without_outputs_says_so() {
        let rendered = render_environment(&Environment::new("env"), false, true);
        assert!(rendered.contains("No stack outputs."));
        assert!(rendered.contains("Stack env"));
    }

    #[test]
    fn dry_run_is_a_single_success_line() {
        let rendered = render_dry_run(
            "Wrote it: out/oam-ecs-environment-template.yml",
            false,
            false,
        );
        assert_eq!(
            rendered,
            "[OK] Wrote it: out/oam-ecs-environment-template.yml\n"
        );
    }
}
