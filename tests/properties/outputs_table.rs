//! Property tests for the stack outputs view.

use std::collections::BTreeMap;

use proptest::prelude::*;

use oam_ecs::ui::views::environment::render_environment;
use oam_ecs::ui::widgets::panel::visible_width;
use oam_ecs::Environment;

fn output_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,24}").unwrap()
}

fn output_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9:/,\\-]{1,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every output key is rendered exactly once, in sorted order.
    #[test]
    fn property_outputs_render_sorted(
        outputs in proptest::collection::btree_map(output_key(), output_value(), 0..12),
    ) {
        let env = Environment::new("oam-ecs-environment")
            .with_outputs(outputs.iter().map(|(k, v)| (k.clone(), v.clone())));

        let rendered = render_environment(&env, false, false);

        let rows: Vec<&str> = rendered
            .lines()
            .filter_map(|l| l.strip_prefix("| "))
            .map(|l| l.trim_end_matches('|').trim_end())
            .skip(2)
            .collect();

        if outputs.is_empty() {
            prop_assert_eq!(rows, vec!["No stack outputs."]);
        } else {
            let seen: Vec<&str> = rows
                .iter()
                .map(|row| row.split_whitespace().next().unwrap_or(""))
                .collect();
            let expected: Vec<&str> = outputs.keys().map(String::as_str).collect();
            prop_assert_eq!(seen, expected);
        }
    }

    /// PROPERTY: all panel lines share one visible width.
    #[test]
    fn property_panel_lines_align(
        outputs in proptest::collection::btree_map(output_key(), output_value(), 1..8),
    ) {
        let env = Environment::new("env").with_outputs(outputs);
        let rendered = render_environment(&env, true, true);

        let widths: BTreeMap<usize, usize> = rendered
            .lines()
            .map(visible_width)
            .fold(BTreeMap::new(), |mut acc, w| {
                *acc.entry(w).or_default() += 1;
                acc
            });
        prop_assert_eq!(widths.len(), 1, "ragged panel:\n{}", rendered);
    }
}
