//! Error types for oam-ecs
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for deployer operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Errors raised while deploying the environment infrastructure
#[derive(Error, Debug)]
pub enum DeployError {
    /// No usable AWS session could be built
    #[error("failed to load AWS session: {message}")]
    Session { message: String },

    /// A CloudFormation API call failed
    #[error("{operation} failed for stack {stack_name}: {message}")]
    Api {
        operation: &'static str,
        stack_name: String,
        message: String,
    },

    /// The stack reached a terminal status other than a successful completion
    #[error("stack {stack_name} ended in status {status}{}", format_reason(.reason))]
    StackFailed {
        stack_name: String,
        status: String,
        reason: Option<String>,
    },

    /// The stack vanished while waiting for it to settle
    #[error("stack {stack_name} not found")]
    StackNotFound { stack_name: String },

    /// The stack did not settle before the configured timeout
    #[error("timed out after {}s waiting for stack {stack_name}", .waited.as_secs())]
    Timeout {
        stack_name: String,
        waited: Duration,
    },

    /// Writing the dry-run template failed
    #[error("failed to write template to {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_reason(reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!(": {}", reason),
        _ => String::new(),
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
