//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod environment_deployer;
pub mod progress;

pub use environment_deployer::EnvironmentDeployer;
pub use progress::{NoopProgress, Progress};
