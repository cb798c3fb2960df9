//! Command registry port.
//!
//! The registry supplies command definitions to the dispatcher.

use thiserror::Error;

use crate::command::domain::SlashCommandDefinition;

/// Result type for command registry operations.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Port for loading command definitions.
pub trait CommandRegistry: Send + Sync {
    /// Finds a command definition by name (without leading slash).
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn find_by_name(&self, command: &str) -> CommandRegistryResult<Option<SlashCommandDefinition>>;

    /// Lists every available command definition.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn list(&self) -> CommandRegistryResult<Vec<SlashCommandDefinition>>;
}

/// Errors for command registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// The registry contains an invalid command definition.
    #[error("invalid command definition: {0}")]
    InvalidDefinition(String),

    /// General adapter failure.
    #[error("command registry unavailable: {0}")]
    Unavailable(String),
}
