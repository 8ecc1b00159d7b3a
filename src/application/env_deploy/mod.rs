//! `env deploy` handler
//!
//! Deploys (or dry-runs) the environment stack through an injected
//! [`EnvironmentDeployer`](crate::domain::ports::EnvironmentDeployer).

mod opts;

pub use opts::DeployEnvironmentOpts;

/// Command name used in JSON events
pub const COMMAND_NAME: &str = "env deploy";

pub const DEPLOY_START: &str = "Deploying the infrastructure for the environment.";
pub const DEPLOY_FAILED: &str = "Failed to deploy the infrastructure for the environment.";

/// Success label naming the stack that holds the environment.
pub fn deploy_succeeded(stack_name: &str) -> String {
    format!(
        "Deployed the environment infrastructure in CloudFormation stack {}.",
        stack_name
    )
}

/// Success line naming the template a dry run wrote.
pub fn dry_run_succeeded(template: &std::path::Path) -> String {
    format!(
        "Wrote infrastructure template to disk for the environment: {}",
        template.display()
    )
}
