//! CloudFormation-backed environment deployer

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use aws_config::SdkConfig;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::config::EnvironmentConfig;
use crate::domain::entities::{Environment, EnvironmentInput};
use crate::domain::ports::EnvironmentDeployer;
use crate::error::{DeployError, DeployResult};

use super::stack_api::{SdkStackApi, StackApi, StackSnapshot, UpdateOutcome};
use super::stack_status::{is_rollback_complete, StackState};
use super::template::{environment_template, template_file_name};

/// Stack-level settings for the deployer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSettings {
    pub stack_name: String,
    pub dry_run_dir: PathBuf,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl From<&EnvironmentConfig> for StackSettings {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            stack_name: config.stack_name.clone(),
            dry_run_dir: config.dry_run_dir.clone(),
            poll_interval: config.poll_interval(),
            timeout: config.timeout(),
        }
    }
}

/// Deploys the environment stack with the CloudFormation API.
///
/// Stack calls are async; they are driven to completion on a private
/// current-thread runtime so the deployer port stays blocking.
pub struct CloudFormationDeployer<A = SdkStackApi> {
    api: A,
    runtime: Runtime,
    settings: StackSettings,
}

impl CloudFormationDeployer {
    /// Reuse a runtime that was already used to load the session.
    pub fn with_runtime(sdk_config: &SdkConfig, settings: StackSettings, runtime: Runtime) -> Self {
        Self::with_api(SdkStackApi::new(sdk_config), settings, runtime)
    }
}

impl<A: StackApi> CloudFormationDeployer<A> {
    pub fn with_api(api: A, settings: StackSettings, runtime: Runtime) -> Self {
        Self {
            api,
            runtime,
            settings,
        }
    }

    pub fn settings(&self) -> &StackSettings {
        &self.settings
    }

    async fn deploy(&self) -> DeployResult<Environment> {
        let stack_name = self.settings.stack_name.as_str();
        let body = environment_template();

        let outcome = match self.api.describe_stack(stack_name).await? {
            None => {
                info!(stack = stack_name, "creating environment stack");
                self.api.create_stack(stack_name, body).await?;
                UpdateOutcome::Updating
            }
            Some(stack) => {
                if is_rollback_complete(&stack.status) {
                    return Err(DeployError::StackFailed {
                        stack_name: stack_name.to_string(),
                        status: stack.status,
                        reason: Some("delete the stack before deploying again".to_string()),
                    });
                }
                info!(stack = stack_name, status = %stack.status, "updating environment stack");
                self.api.update_stack(stack_name, body).await?
            }
        };

        let stack = match outcome {
            UpdateOutcome::Updating => self.wait_for_stack().await?,
            UpdateOutcome::Unchanged => {
                info!(stack = stack_name, "environment stack is already up to date");
                self.api
                    .describe_stack(stack_name)
                    .await?
                    .ok_or_else(|| DeployError::StackNotFound {
                        stack_name: stack_name.to_string(),
                    })?
            }
        };

        Ok(Environment::new(stack_name).with_outputs(stack.outputs))
    }

    /// Poll until the stack leaves its `*_IN_PROGRESS` state.
    async fn wait_for_stack(&self) -> DeployResult<StackSnapshot> {
        let stack_name = self.settings.stack_name.as_str();
        let started = Instant::now();

        loop {
            let stack = self
                .api
                .describe_stack(stack_name)
                .await?
                .ok_or_else(|| DeployError::StackNotFound {
                    stack_name: stack_name.to_string(),
                })?;

            match StackState::classify(&stack.status) {
                StackState::Complete => {
                    info!(
                        stack = stack_name,
                        status = %stack.status,
                        elapsed_secs = started.elapsed().as_secs(),
                        "stack settled"
                    );
                    return Ok(stack);
                }
                StackState::Failed => {
                    return Err(DeployError::StackFailed {
                        stack_name: stack_name.to_string(),
                        status: stack.status,
                        reason: stack.reason,
                    });
                }
                StackState::InProgress => {
                    debug!(stack = stack_name, status = %stack.status, "waiting for stack");
                }
            }

            if started.elapsed() >= self.settings.timeout {
                return Err(DeployError::Timeout {
                    stack_name: stack_name.to_string(),
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(self.settings.poll_interval).await;
        }
    }
}

impl<A: StackApi> EnvironmentDeployer for CloudFormationDeployer<A> {
    fn deploy_environment(&self, _input: &EnvironmentInput) -> DeployResult<Environment> {
        self.runtime.block_on(self.deploy())
    }

    fn dry_run_environment(&self, _input: &EnvironmentInput) -> DeployResult<PathBuf> {
        write_template(&self.settings.dry_run_dir, &self.settings.stack_name)
    }
}

/// Current-thread runtime used for SDK calls.
pub fn new_runtime() -> DeployResult<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

/// Write the environment template under `dir`, creating it if needed.
pub fn write_template(dir: &Path, stack_name: &str) -> DeployResult<PathBuf> {
    let path = dir.join(template_file_name(stack_name));

    fs::create_dir_all(dir).map_err(|source| DeployError::Template {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, environment_template()).map_err(|source| DeployError::Template {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "wrote environment template");
    Ok(path)
}
