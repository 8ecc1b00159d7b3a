//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! - `aws/` - CloudFormation deployer, session loading, embedded template

pub mod aws;

pub use aws::{CloudFormationDeployer, StackSettings};
