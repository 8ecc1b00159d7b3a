//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --no-animation, --region,
//! --profile) are inherited by all subcommands.

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// oam-ecs - run Open Application Model workloads on Amazon ECS
#[derive(Parser, Debug)]
#[command(name = "oam-ecs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output newline-delimited JSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable animations (spinners)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// AWS region (overrides config and OAM_ECS_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS shared config profile (overrides config and OAM_ECS_PROFILE)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the oam-ecs environment
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum EnvCommands {
    /// Deploy the oam-ecs environment
    #[command(
        long_about = "Creates (or updates) the shared infrastructure, including a VPC and ECS cluster, for oam-ecs applications",
        after_help = "Examples:\n  Deploy the environment.\n  $ oam-ecs env deploy"
    )]
    Deploy {
        /// Write the CloudFormation template to disk instead of deploying it
        #[arg(long)]
        dry_run: bool,
    },
}
