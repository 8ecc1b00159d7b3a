//! CloudFormation stack calls
//!
//! The three API calls the deployer makes, behind a trait so the deploy
//! state machine can run against a scripted stack in tests.

use aws_config::SdkConfig;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::{Capability, Output, Stack};
use aws_sdk_cloudformation::Client;
use tracing::debug;

use crate::error::{DeployError, DeployResult};

use super::stack_status::{is_missing_stack, is_no_op_update};

/// What the deployer needs to know about a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSnapshot {
    pub status: String,
    pub reason: Option<String>,
    pub outputs: Vec<(String, String)>,
}

impl From<&Stack> for StackSnapshot {
    fn from(stack: &Stack) -> Self {
        Self {
            status: stack
                .stack_status()
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            reason: stack.stack_status_reason().map(str::to_string),
            outputs: outputs_of(stack.outputs()),
        }
    }
}

/// Result of submitting an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updating,
    /// The template matched the deployed stack.
    Unchanged,
}

/// CloudFormation operations used by the environment deployer.
#[allow(async_fn_in_trait)]
pub trait StackApi {
    /// `DescribeStacks`; `None` when the stack does not exist.
    async fn describe_stack(&self, stack_name: &str) -> DeployResult<Option<StackSnapshot>>;

    /// `CreateStack` with `CAPABILITY_IAM`.
    async fn create_stack(&self, stack_name: &str, template_body: &str) -> DeployResult<()>;

    /// `UpdateStack` with `CAPABILITY_IAM`.
    async fn update_stack(
        &self,
        stack_name: &str,
        template_body: &str,
    ) -> DeployResult<UpdateOutcome>;
}

/// [`StackApi`] over the AWS SDK client.
pub struct SdkStackApi {
    client: Client,
}

impl SdkStackApi {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

impl StackApi for SdkStackApi {
    async fn describe_stack(&self, stack_name: &str) -> DeployResult<Option<StackSnapshot>> {
        let result = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await;

        match result {
            Ok(resp) => Ok(resp.stacks().first().map(StackSnapshot::from)),
            Err(err) => {
                let (code, message) = err
                    .as_service_error()
                    .map(|e| (e.code(), e.message()))
                    .unwrap_or((None, None));
                if is_missing_stack(code, message) {
                    debug!(stack = stack_name, "stack does not exist yet");
                    Ok(None)
                } else {
                    Err(api_error("DescribeStacks", stack_name, &err))
                }
            }
        }
    }

    async fn create_stack(&self, stack_name: &str, template_body: &str) -> DeployResult<()> {
        let resp = self
            .client
            .create_stack()
            .stack_name(stack_name)
            .template_body(template_body)
            .capabilities(Capability::CapabilityIam)
            .send()
            .await
            .map_err(|err| api_error("CreateStack", stack_name, &err))?;

        debug!(stack_id = ?resp.stack_id(), "create submitted");
        Ok(())
    }

    async fn update_stack(
        &self,
        stack_name: &str,
        template_body: &str,
    ) -> DeployResult<UpdateOutcome> {
        let result = self
            .client
            .update_stack()
            .stack_name(stack_name)
            .template_body(template_body)
            .capabilities(Capability::CapabilityIam)
            .send()
            .await;

        match result {
            Ok(resp) => {
                debug!(stack_id = ?resp.stack_id(), "update submitted");
                Ok(UpdateOutcome::Updating)
            }
            Err(err) => {
                let (code, message) = err
                    .as_service_error()
                    .map(|e| (e.code(), e.message()))
                    .unwrap_or((None, None));
                if is_no_op_update(code, message) {
                    Ok(UpdateOutcome::Unchanged)
                } else {
                    Err(api_error("UpdateStack", stack_name, &err))
                }
            }
        }
    }
}

fn api_error<E>(operation: &'static str, stack_name: &str, err: &E) -> DeployError
where
    E: std::error::Error,
{
    DeployError::Api {
        operation,
        stack_name: stack_name.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}

/// Keep outputs that carry both a key and a value.
fn outputs_of(outputs: &[Output]) -> Vec<(String, String)> {
    outputs
        .iter()
        .filter_map(|output| match (output.output_key(), output.output_value()) {
            (Some(key), Some(value)) => Some((key.to_string(), value.to_string())),
            _ => None,
        })
        .collect()
}
