//! Command definitions and typed parameter validation.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::{BTreeMap, HashSet};

use super::{ParameterProblem, SlashCommandError};

/// Parameter type for command validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandParameterType {
    /// Free-form string value.
    String,
    /// Numeric value. Validated as a number but kept as the entered text.
    Number,
    /// Boolean value (`true` or `false`).
    Boolean,
    /// One of a closed set of options.
    Select,
}

/// Parameter specification for a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Help text shown by chat clients.
    pub description: String,
    /// Parameter type.
    pub parameter_type: CommandParameterType,
    /// Whether the parameter is required.
    pub required: bool,
    /// Allowed options for `select` parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl CommandParameterSpec {
    /// Creates an optional parameter.
    #[must_use]
    pub fn optional(
        name: impl Into<String>,
        parameter_type: CommandParameterType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            parameter_type,
            required: false,
            options: Vec::new(),
        }
    }

    /// Creates a required parameter.
    #[must_use]
    pub fn required(
        name: impl Into<String>,
        parameter_type: CommandParameterType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: true,
            ..Self::optional(name, parameter_type, description)
        }
    }

    /// Sets allowed options for `select` parameters.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A command the bot answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandDefinition {
    /// Command name without the leading slash.
    pub command: String,
    /// Human-readable description.
    pub description: String,
    /// Parameter definitions.
    #[serde(default)]
    pub parameters: Vec<CommandParameterSpec>,
}

impl SlashCommandDefinition {
    /// Creates a command definition without parameters.
    #[must_use]
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into().to_ascii_lowercase(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter specification.
    #[must_use]
    pub fn with_parameter(mut self, parameter: CommandParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Checks the parameter schema itself.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterProblem::BadDefinition`] for duplicate parameter
    /// names or `select` parameters without options.
    pub fn validate_schema(&self) -> Result<(), SlashCommandError> {
        let mut names = HashSet::new();
        for parameter in &self.parameters {
            let reason = if !names.insert(parameter.name.as_str()) {
                "duplicate parameter definition"
            } else if parameter.parameter_type == CommandParameterType::Select
                && parameter.options.is_empty()
            {
                "select parameters must provide options"
            } else {
                continue;
            };
            return Err(SlashCommandError::parameter(
                &self.command,
                &parameter.name,
                ParameterProblem::BadDefinition(reason.to_owned()),
            ));
        }
        Ok(())
    }

    /// Validates raw invocation parameters and converts them to typed values.
    ///
    /// Every declared parameter appears in the result. Optional parameters
    /// that were not supplied, or were supplied blank, map to `null`.
    /// Numbers stay strings holding the trimmed input so `15.00` is not
    /// rewritten as `15.0`.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when parameters are missing, unknown, or
    /// invalid for the declared schema.
    pub fn validate_parameters(
        &self,
        provided: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, Value>, SlashCommandError> {
        self.validate_schema()?;

        if let Some(unknown) = provided
            .keys()
            .find(|key| !self.parameters.iter().any(|parameter| parameter.name == **key))
        {
            return Err(SlashCommandError::parameter(
                &self.command,
                unknown,
                ParameterProblem::Unknown,
            ));
        }

        self.parameters
            .iter()
            .map(|parameter| {
                let supplied = provided
                    .get(&parameter.name)
                    .filter(|raw| !raw.trim().is_empty());
                let value = match supplied {
                    Some(raw) => self.parse_value(parameter, raw)?,
                    None if parameter.required => {
                        return Err(SlashCommandError::parameter(
                            &self.command,
                            &parameter.name,
                            ParameterProblem::Missing,
                        ));
                    }
                    None => Value::Null,
                };
                Ok((parameter.name.clone(), value))
            })
            .collect()
    }

    fn parse_value(
        &self,
        parameter: &CommandParameterSpec,
        raw: &str,
    ) -> Result<Value, SlashCommandError> {
        let invalid = |reason: String| {
            SlashCommandError::parameter(
                &self.command,
                &parameter.name,
                ParameterProblem::InvalidValue(reason),
            )
        };

        match parameter.parameter_type {
            CommandParameterType::String => Ok(Value::String(raw.to_owned())),
            CommandParameterType::Number => {
                let entered = raw.trim();
                entered
                    .parse::<Number>()
                    .map(|_| Value::String(entered.to_owned()))
                    .map_err(|_| invalid("expected a number".to_owned()))
            }
            CommandParameterType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(invalid("expected true or false".to_owned())),
            },
            CommandParameterType::Select => {
                if parameter.options.iter().any(|option| option == raw) {
                    Ok(Value::String(raw.to_owned()))
                } else {
                    Err(invalid(format!(
                        "expected one of [{}]",
                        parameter.options.join(", ")
                    )))
                }
            }
        }
    }
}
