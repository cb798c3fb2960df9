//! Errors raised while reading a chat command.
//!
//! Every message here is shown to the invoking user as-is.

use thiserror::Error;

/// Why a named parameter was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParameterProblem {
    /// The command does not declare the parameter.
    #[error("not accepted by this command")]
    Unknown,

    /// A required parameter was absent or blank.
    #[error("required but not supplied")]
    Missing,

    /// The supplied value does not fit the parameter type.
    #[error("{0}")]
    InvalidValue(String),

    /// The registry declares the parameter inconsistently.
    #[error("declared incorrectly: {0}")]
    BadDefinition(String),
}

/// Errors for chat command text and its parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlashCommandError {
    /// Input was blank.
    #[error("no command given, try /findexam or /uls")]
    EmptyInput,

    /// Input does not start with `/`.
    #[error("commands start with '/'")]
    MissingLeadingSlash,

    /// Command name is empty or has characters outside `[A-Za-z0-9_-]`.
    #[error("'{0}' is not a valid command name")]
    InvalidCommandName(String),

    /// A token outside the command name is not `key=value`.
    #[error("'{0}' is not a key=value pair")]
    MalformedParameter(String),

    /// A quoted value ran to the end of input.
    #[error("a quoted value is missing its closing quote")]
    UnterminatedQuote,

    /// The same key appeared twice (keys are case-insensitive).
    #[error("parameter '{0}' was given more than once")]
    RepeatedParameter(String),

    /// The registry has no command with this name.
    #[error("command '/{0}' was not found")]
    UnknownCommand(String),

    /// A parameter of a known command was rejected.
    #[error("/{command} {parameter}: {problem}")]
    Parameter {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// What was wrong with it.
        problem: ParameterProblem,
    },
}

impl SlashCommandError {
    /// Builds a [`SlashCommandError::Parameter`].
    #[must_use]
    pub fn parameter(
        command: impl Into<String>,
        parameter: impl Into<String>,
        problem: ParameterProblem,
    ) -> Self {
        Self::Parameter {
            command: command.into(),
            parameter: parameter.into(),
            problem,
        }
    }
}
