//! Port contracts for the command layer.

pub mod registry;

pub use registry::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
