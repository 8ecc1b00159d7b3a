//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::{AnimationMode, ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration resolved from the user config file (or defaults).
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Path of the user config file (`$XDG_CONFIG_HOME/oam-ecs/config.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("oam-ecs").join("config.toml"))
}

/// Load the user config if it exists, falling back to defaults.
///
/// A config file that exists but fails to parse is an error; a missing file
/// is not.
pub fn load_user_config() -> Result<LoadedConfig, ConfigError> {
    match user_config_path() {
        Some(path) => load_from(&path),
        None => Ok(LoadedConfig::default()),
    }
}

/// Load configuration from `path` if it exists, falling back to defaults.
pub fn load_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Ok(LoadedConfig::default());
    }

    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config,
        path: Some(path.to_path_buf()),
        warnings,
    })
}

/// Apply environment variable overrides (OAM_ECS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // OAM_ECS_REGION
    if let Some(region) = non_empty(get_env("OAM_ECS_REGION")) {
        config.aws.region = Some(region);
    }

    // OAM_ECS_PROFILE
    if let Some(profile) = non_empty(get_env("OAM_ECS_PROFILE")) {
        config.aws.profile = Some(profile);
    }

    // OAM_ECS_STACK_NAME
    if let Some(name) = non_empty(get_env("OAM_ECS_STACK_NAME")) {
        config.environment.stack_name = name;
    }

    // OAM_ECS_DRY_RUN_DIR
    if let Some(dir) = non_empty(get_env("OAM_ECS_DRY_RUN_DIR")) {
        config.environment.dry_run_dir = PathBuf::from(dir);
    }

    // OAM_ECS_POLL_INTERVAL_SECS
    if let Some(secs) = get_env("OAM_ECS_POLL_INTERVAL_SECS").and_then(|v| v.trim().parse().ok())
    {
        config.environment.poll_interval_secs = secs;
    }

    // OAM_ECS_TIMEOUT_SECS
    if let Some(secs) = get_env("OAM_ECS_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        config.environment.timeout_secs = secs;
    }

    // OAM_ECS_COLOR
    if let Some(color) = get_env("OAM_ECS_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    // OAM_ECS_ANIMATION
    if let Some(animation) = get_env("OAM_ECS_ANIMATION").and_then(|v| AnimationMode::parse(&v)) {
        config.output.animation = animation;
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Get XDG config directory
fn config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "aws",
        "region",
        "profile",
        "environment",
        "stack_name",
        "dry_run_dir",
        "poll_interval_secs",
        "timeout_secs",
        "output",
        "color",
        "animation",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
