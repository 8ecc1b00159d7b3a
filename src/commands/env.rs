//! Environment command handlers
//!
//! `env deploy` provisions the shared environment stack.

use std::io::{self, Write};

use anyhow::Result;

use oam_ecs::config::Config;
use oam_ecs::presentation::factory::create_deploy_environment;
use oam_ecs::ui::context::UiContext;

/// Execute `env deploy`
pub fn cmd_env_deploy(dry_run: bool, config: &Config, ui: UiContext) -> Result<()> {
    let mut opts = create_deploy_environment(config, ui, dry_run)?;

    let mut out = io::stdout().lock();
    opts.execute(&mut out)?;
    out.flush()?;
    Ok(())
}
