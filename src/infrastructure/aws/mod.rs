//! AWS implementations of the environment ports

pub mod cloudformation;
pub mod session;
pub mod stack_api;
pub mod stack_status;
pub mod template;

pub use cloudformation::{CloudFormationDeployer, StackSettings};
pub use stack_api::{SdkStackApi, StackApi, StackSnapshot, UpdateOutcome};
