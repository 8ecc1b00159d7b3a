//! Configuration module for oam-ecs
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (OAM_ECS_*)
//! 3. User config (~/.config/oam-ecs/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_from, load_user_config, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, LoadedConfig,
};
pub use types::{
    AnimationMode, AwsConfig, ColorMode, Config, EnvironmentConfig, OutputConfig,
    DEFAULT_STACK_NAME,
};
