//! Deployer Factory
//!
//! Creates the `env deploy` collaborators with infrastructure wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployEnvironmentOpts;
use crate::config::Config;
use crate::error::DeployResult;
use crate::infrastructure::aws::cloudformation::new_runtime;
use crate::infrastructure::aws::session;
use crate::infrastructure::{CloudFormationDeployer, StackSettings};
use crate::ui::context::UiContext;
use crate::ui::progress::TerminalProgress;

/// `env deploy` wired to CloudFormation and the terminal spinner
pub type ConcreteDeployEnvironmentOpts =
    DeployEnvironmentOpts<CloudFormationDeployer, TerminalProgress>;

/// Load the AWS session and build a CloudFormation deployer for `config`.
pub fn create_environment_deployer(config: &Config) -> DeployResult<CloudFormationDeployer> {
    let runtime = new_runtime()?;
    let sdk_config = runtime.block_on(session::load(&config.aws))?;
    let settings = StackSettings::from(&config.environment);

    Ok(CloudFormationDeployer::with_runtime(&sdk_config, settings, runtime))
}

/// Create the `env deploy` command with all dependencies wired up
pub fn create_deploy_environment(
    config: &Config,
    ui: UiContext,
    dry_run: bool,
) -> DeployResult<ConcreteDeployEnvironmentOpts> {
    let deployer = create_environment_deployer(config)?;
    let progress = TerminalProgress::stderr(ui);

    Ok(DeployEnvironmentOpts::new(deployer, progress, ui).with_dry_run(dry_run))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_environment_deployer_with_region_uses_stack_settings() {
        let mut config = Config::default();
        config.aws.region = Some("us-west-2".to_string());
        config.environment.stack_name = "oam-ecs-test".to_string();

        let deployer = create_environment_deployer(&config).unwrap();

        assert_eq!(deployer.settings().stack_name, "oam-ecs-test");
    }
}
