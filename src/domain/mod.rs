//! Domain Layer
//!
//! Entities exchanged with the deployer and the ports (traits) the command
//! handler depends on. Infrastructure provides the concrete implementations.

pub mod entities;
pub mod ports;
