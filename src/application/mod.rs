//! Application Layer
//!
//! Command handlers that orchestrate domain ports. Handlers own no
//! infrastructure; everything they talk to is injected.

pub mod env_deploy;

pub use env_deploy::DeployEnvironmentOpts;
