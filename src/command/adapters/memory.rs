//! In-memory command registry with the bot's built-in commands.

use std::collections::HashMap;

use crate::command::domain::{CommandParameterSpec, CommandParameterType, SlashCommandDefinition};
use crate::command::ports::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
use crate::exam::domain::{ExamType, VecCode};

/// Name of the exam session search command.
pub const FIND_EXAM_COMMAND: &str = "findexam";
/// Name of the licence lookup command.
pub const ULS_COMMAND: &str = "uls";
/// Name of the greeting command.
pub const HELLO_COMMAND: &str = "hello";

/// In-memory registry for command definitions.
#[derive(Debug, Clone)]
pub struct InMemoryCommandRegistry {
    commands: HashMap<String, SlashCommandDefinition>,
}

impl InMemoryCommandRegistry {
    /// Creates a registry holding `findexam`, `uls` and `hello`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: builtin_commands()
                .into_iter()
                .map(|definition| {
                    debug_assert!(
                        definition.validate_schema().is_ok(),
                        "built-in command definitions must remain valid",
                    );
                    (definition.command.clone(), definition)
                })
                .collect(),
        }
    }

    /// Creates a registry from supplied command definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::InvalidDefinition`] when a definition
    /// has an invalid schema or a command name repeats.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = SlashCommandDefinition>,
    ) -> CommandRegistryResult<Self> {
        let mut commands = HashMap::new();
        for mut definition in definitions {
            definition.command = definition.command.to_ascii_lowercase();
            definition
                .validate_schema()
                .map_err(|error| CommandRegistryError::InvalidDefinition(error.to_string()))?;
            let name = definition.command.clone();
            if commands.insert(name.clone(), definition).is_some() {
                return Err(CommandRegistryError::InvalidDefinition(format!(
                    "duplicate command '/{name}'"
                )));
            }
        }
        Ok(Self { commands })
    }
}

impl Default for InMemoryCommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry for InMemoryCommandRegistry {
    fn find_by_name(&self, command: &str) -> CommandRegistryResult<Option<SlashCommandDefinition>> {
        Ok(self.commands.get(&command.to_ascii_lowercase()).cloned())
    }

    fn list(&self) -> CommandRegistryResult<Vec<SlashCommandDefinition>> {
        let mut commands: Vec<_> = self.commands.values().cloned().collect();
        commands.sort_by(|left, right| left.command.cmp(&right.command));
        Ok(commands)
    }
}

fn post_parameter() -> CommandParameterSpec {
    CommandParameterSpec::optional(
        "post",
        CommandParameterType::Boolean,
        "Post the results to the channel instead of only to you",
    )
}

fn builtin_commands() -> Vec<SlashCommandDefinition> {
    use CommandParameterType as Kind;

    vec![
        SlashCommandDefinition::new(FIND_EXAM_COMMAND, "Find upcoming amateur radio exam sessions")
            .with_parameter(CommandParameterSpec::optional(
                "zipcode",
                Kind::String,
                "Postal code to search around",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "geo_long",
                Kind::Number,
                "Longitude to search around",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "geo_lat",
                Kind::Number,
                "Latitude to search around",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "max_distance",
                Kind::Number,
                "Maximum distance from the search location",
            ))
            .with_parameter(
                CommandParameterSpec::optional("vec", Kind::Select, "Volunteer Examiner Coordinator")
                    .with_options(VecCode::ALL.iter().map(|vec| vec.code())),
            )
            .with_parameter(CommandParameterSpec::optional(
                "team_id",
                Kind::String,
                "Volunteer examiner team identifier",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "start_date",
                Kind::String,
                "Earliest session date (YYYY-MM-DD)",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "end_date",
                Kind::String,
                "Latest session date (YYYY-MM-DD)",
            ))
            .with_parameter(
                CommandParameterSpec::optional("exam_type", Kind::Select, "Remote or in-person sessions")
                    .with_options(ExamType::ALL.iter().map(|exam_type| exam_type.code())),
            )
            .with_parameter(CommandParameterSpec::optional(
                "max_fee",
                Kind::Number,
                "Maximum exam fee",
            ))
            .with_parameter(CommandParameterSpec::optional(
                "include_full",
                Kind::Boolean,
                "Include sessions that are already full",
            ))
            .with_parameter(post_parameter()),
        SlashCommandDefinition::new(ULS_COMMAND, "Look up a licence by callsign or FRN")
            .with_parameter(CommandParameterSpec::required(
                "lookup_id",
                Kind::String,
                "Callsign or FRN",
            ))
            .with_parameter(post_parameter()),
        SlashCommandDefinition::new(HELLO_COMMAND, "Say hello"),
    ]
}
