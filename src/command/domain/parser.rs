//! Parser for textual slash-command invocations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SlashCommandError;

/// A parsed slash-command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandInvocation {
    command: String,
    parameters: BTreeMap<String, String>,
}

impl SlashCommandInvocation {
    /// Parses `/<command> key=value key2="quoted value"` input.
    ///
    /// Command and parameter names are case-insensitive and stored in lower
    /// case. Values keep their case.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when the input is empty or malformed.
    pub fn parse(raw_input: &str) -> Result<Self, SlashCommandError> {
        let mut tokens = Tokens::new(raw_input.trim());
        let command_token = tokens.next().ok_or(SlashCommandError::EmptyInput)??;
        let command = parse_command_token(&command_token)?;

        let mut parameters = BTreeMap::new();
        for token in tokens {
            let (key, value) = split_parameter(&token?)?;
            if parameters.insert(key.clone(), value).is_some() {
                return Err(SlashCommandError::RepeatedParameter(key));
            }
        }

        Ok(Self {
            command,
            parameters,
        })
    }

    /// Returns the command name without the leading slash.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns parsed parameter values as raw strings.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

fn parse_command_token(token: &str) -> Result<String, SlashCommandError> {
    let command = token
        .strip_prefix('/')
        .ok_or(SlashCommandError::MissingLeadingSlash)?;
    if !is_valid_identifier(command) {
        return Err(SlashCommandError::InvalidCommandName(command.to_owned()));
    }
    Ok(command.to_ascii_lowercase())
}

fn split_parameter(token: &str) -> Result<(String, String), SlashCommandError> {
    match token.split_once('=') {
        Some((key, value)) if is_valid_identifier(key) => {
            Ok((key.to_ascii_lowercase(), value.to_owned()))
        }
        _ => Err(SlashCommandError::MalformedParameter(token.to_owned())),
    }
}

fn is_valid_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}

/// Whitespace-separated tokens where single or double quotes group text and
/// a backslash escapes the next character inside quotes.
struct Tokens<'a> {
    chars: std::str::Chars<'a>,
    failed: bool,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            failed: false,
        }
    }

    fn read_quoted(&mut self, quote: char, token: &mut String) -> Result<(), SlashCommandError> {
        while let Some(character) = self.chars.next() {
            match character {
                '\\' => token.push(
                    self.chars
                        .next()
                        .ok_or(SlashCommandError::UnterminatedQuote)?,
                ),
                _ if character == quote => return Ok(()),
                _ => token.push(character),
            }
        }
        Err(SlashCommandError::UnterminatedQuote)
    }

    fn next_token(&mut self) -> Option<Result<String, SlashCommandError>> {
        let mut token = String::new();
        let mut started = false;

        while let Some(character) = self.chars.next() {
            match character {
                _ if character.is_whitespace() => {
                    if started {
                        break;
                    }
                }
                '"' | '\'' => {
                    started = true;
                    if let Err(error) = self.read_quoted(character, &mut token) {
                        return Some(Err(error));
                    }
                }
                '\\' => {
                    token.push(character);
                    return Some(Err(SlashCommandError::MalformedParameter(token)));
                }
                _ => {
                    started = true;
                    token.push(character);
                }
            }
        }

        started.then_some(Ok(token))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<String, SlashCommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token();
        self.failed = matches!(item, Some(Err(_)));
        item
    }
}
