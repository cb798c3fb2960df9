//! Domain types for chat slash commands.

mod definition;
mod error;
mod parser;
mod reply;

pub use definition::{CommandParameterSpec, CommandParameterType, SlashCommandDefinition};
pub use error::{ParameterProblem, SlashCommandError};
pub use parser::SlashCommandInvocation;
pub use reply::{CommandReply, InvocationContext, Visibility};
