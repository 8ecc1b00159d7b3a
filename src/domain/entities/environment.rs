//! Environment entity
//!
//! The deployed environment as reported back by the deployer: the stack that
//! holds it and the stack outputs (VPC id, subnet ids, cluster name, ...).

use std::collections::BTreeMap;

/// Parameters for deploying the environment stack.
///
/// The environment template is fixed, so there is nothing to configure yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentInput {}

impl EnvironmentInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A deployed environment stack and its outputs.
///
/// Outputs are kept in a `BTreeMap` so every consumer sees keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    stack_name: String,
    outputs: BTreeMap<String, String>,
}

impl Environment {
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn with_outputs<I, K, V>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.outputs
            .extend(outputs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn outputs(&self) -> &BTreeMap<String, String> {
        &self.outputs
    }
}
