//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the `env deploy` command with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use oam_ecs::presentation::factory;
//!
//! let mut opts = factory::create_deploy_environment(&config, ui, false)?;
//! opts.execute(&mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod factory;

pub use factory::{create_deploy_environment, create_environment_deployer};
