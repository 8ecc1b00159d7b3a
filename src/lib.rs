//! oam-ecs - shared ECS infrastructure for Open Application Model workloads
//!
//! The `env deploy` command provisions the environment stack (VPC, subnets,
//! ECS cluster) through CloudFormation and reports the stack outputs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::DeployEnvironmentOpts;
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Environment, EnvironmentInput};
pub use domain::ports::{EnvironmentDeployer, Progress};
pub use error::{ConfigError, DeployError, DeployResult};
