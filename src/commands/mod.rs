//! Command handlers for the oam-ecs binary

pub mod env;

use tracing::debug;

use oam_ecs::config::{Config, LoadedConfig};
use oam_ecs::ui::context::UiContext;
use oam_ecs::ui::output::print_config_warnings;

/// Session flags that override config files and environment variables
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// CLI flags sit above config files and environment variables.
pub fn apply_cli_overrides(mut config: Config, globals: &GlobalArgs) -> Config {
    if let Some(region) = &globals.region {
        config.aws.region = Some(region.clone());
    }
    if let Some(profile) = &globals.profile {
        config.aws.profile = Some(profile.clone());
    }
    config
}

/// Note where config came from and surface unknown-key warnings.
pub fn report_config(loaded: &LoadedConfig, ui: &UiContext) {
    match &loaded.path {
        Some(path) => debug!(path = %path.display(), "loaded user config"),
        None => debug!("no user config, using defaults"),
    }
    print_config_warnings(&loaded.warnings, ui);
}
