//! oam-ecs CLI - run Open Application Model workloads on Amazon ECS
//!
//! Usage: oam-ecs env deploy [--dry-run]

mod commands;

use clap::Parser;

use oam_ecs::config;
use oam_ecs::presentation::cli::{Cli, Commands, EnvCommands};
use oam_ecs::ui::context::UiContext;
use oam_ecs::ui::error::print_error;

fn main() {
    let cli = Cli::parse();

    let globals = commands::GlobalArgs {
        region: cli.region,
        profile: cli.profile,
    };

    // A config file that fails to load still leaves flags and env overrides
    // in force for the error report.
    let loaded = config::load_user_config();
    let settings = loaded
        .as_ref()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default();
    let settings = commands::apply_cli_overrides(config::with_env_overrides(settings), &globals);
    let ui = UiContext::new(
        cli.json,
        cli.verbose,
        cli.color,
        cli.no_animation,
        &settings,
    );

    oam_ecs::logging::init_tracing(cli.verbose, ui.stderr_color);

    let result = loaded.map_err(anyhow::Error::from).and_then(|loaded| {
        commands::report_config(&loaded, &ui);
        match cli.command {
            Commands::Env { command } => match command {
                EnvCommands::Deploy { dry_run } => {
                    commands::env::cmd_env_deploy(dry_run, &settings, ui)
                }
            },
        }
    });

    if let Err(err) = result {
        print_error(&err, &ui);
        std::process::exit(1);
    }
}
