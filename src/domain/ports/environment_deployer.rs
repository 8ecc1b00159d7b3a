//! Environment Deployer Port
//!
//! Abstracts the service that provisions the environment infrastructure.
//! The command handler only sees this trait; the CloudFormation
//! implementation lives in the infrastructure layer.

use std::path::PathBuf;

use crate::domain::entities::{Environment, EnvironmentInput};
use crate::error::DeployResult;

/// Trait for environment deployers
///
/// Both operations are blocking: they return once the deployment has settled
/// (or the template has been written).
pub trait EnvironmentDeployer {
    /// Create or update the environment stack and return its outputs.
    fn deploy_environment(&self, input: &EnvironmentInput) -> DeployResult<Environment>;

    /// Write the environment template to disk without applying it.
    ///
    /// Returns the path of the written template.
    fn dry_run_environment(&self, input: &EnvironmentInput) -> DeployResult<PathBuf>;
}

impl<T: EnvironmentDeployer + ?Sized> EnvironmentDeployer for Box<T> {
    fn deploy_environment(&self, input: &EnvironmentInput) -> DeployResult<Environment> {
        (**self).deploy_environment(input)
    }

    fn dry_run_environment(&self, input: &EnvironmentInput) -> DeployResult<PathBuf> {
        (**self).dry_run_environment(input)
    }
}
