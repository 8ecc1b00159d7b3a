//! Domain Entities

pub mod environment;

pub use environment::{Environment, EnvironmentInput};
