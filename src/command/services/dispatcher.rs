//! Routes parsed commands to the exam lookup service.

use chrono::SecondsFormat;
use mockable::Clock;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::command::adapters::{FIND_EXAM_COMMAND, HELLO_COMMAND, ULS_COMMAND};
use crate::command::domain::{
    CommandReply, InvocationContext, ParameterProblem, SlashCommandError, SlashCommandInvocation,
    Visibility,
};
use crate::command::ports::{CommandRegistry, CommandRegistryError};
use crate::exam::domain::{ExamType, SearchFilter, VecCode};
use crate::exam::ports::ExamDirectory;
use crate::exam::services::{ExamLookupService, ExamServiceError};

/// Errors raised while dispatching a command.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The command text or its parameters were rejected.
    #[error(transparent)]
    Command(#[from] SlashCommandError),
    /// Command definitions could not be loaded.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),
    /// The exam lookup failed.
    #[error(transparent)]
    Exam(#[from] ExamServiceError),
}

impl DispatchError {
    /// Returns the message shown to the requesting user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Command(error) => error.to_string(),
            Self::Registry(_) => "Commands are unavailable right now, try again later.".to_owned(),
            Self::Exam(error) => error.user_message(),
        }
    }
}

/// Result type for command dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;

type Parameters = BTreeMap<String, Value>;

/// Dispatches chat commands and builds their replies.
#[derive(Clone)]
pub struct CommandDispatcher<R, D, C>
where
    R: CommandRegistry,
    D: ExamDirectory,
    C: Clock + Send + Sync,
{
    registry: Arc<R>,
    exams: ExamLookupService<D>,
    clock: Arc<C>,
}

impl<R, D, C> CommandDispatcher<R, D, C>
where
    R: CommandRegistry,
    D: ExamDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(registry: Arc<R>, exams: ExamLookupService<D>, clock: Arc<C>) -> Self {
        Self {
            registry,
            exams,
            clock,
        }
    }

    /// Handles a raw command and always produces a reply.
    ///
    /// Failures become an ephemeral text reply carrying the user-facing
    /// message.
    pub async fn dispatch(&self, raw_input: &str, context: &InvocationContext) -> CommandReply {
        match self.try_dispatch(raw_input, context).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(error = %error, "command failed");
                CommandReply::text(Visibility::Ephemeral, error.user_message())
            }
        }
    }

    /// Handles a raw command.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Command`] when the text cannot be parsed,
    /// names an unknown command, or carries invalid parameters,
    /// [`DispatchError::Registry`] when definitions cannot be loaded, and
    /// [`DispatchError::Exam`] when the lookup itself fails.
    pub async fn try_dispatch(
        &self,
        raw_input: &str,
        context: &InvocationContext,
    ) -> DispatchResult<CommandReply> {
        let invocation = SlashCommandInvocation::parse(raw_input)?;
        let definition = self
            .registry
            .find_by_name(invocation.command())?
            .ok_or_else(|| SlashCommandError::UnknownCommand(invocation.command().to_owned()))?;
        let parameters = definition.validate_parameters(invocation.parameters())?;

        info!(
            command = invocation.command(),
            user = context.user_mention(),
            "received command"
        );

        match invocation.command() {
            FIND_EXAM_COMMAND => self.find_exam(&parameters).await,
            ULS_COMMAND => self.lookup_license(&parameters).await,
            HELLO_COMMAND => Ok(CommandReply::text(
                Visibility::Public,
                format!("Hi, {}", context.user_mention()),
            )),
            other => Err(SlashCommandError::UnknownCommand(other.to_owned()).into()),
        }
    }

    async fn find_exam(&self, parameters: &Parameters) -> DispatchResult<CommandReply> {
        let filter = self.search_filter(parameters)?;
        let embed = self.exams.find_exams(filter).await?;
        Ok(CommandReply::embed(post_visibility(parameters), embed))
    }

    async fn lookup_license(&self, parameters: &Parameters) -> DispatchResult<CommandReply> {
        let lookup_id = text(parameters, "lookup_id").unwrap_or_default();
        let embed = self.exams.lookup_license(&lookup_id).await?;
        Ok(CommandReply::embed(post_visibility(parameters), embed))
    }

    fn search_filter(&self, parameters: &Parameters) -> Result<SearchFilter, SlashCommandError> {
        let vec = text(parameters, "vec")
            .map(|code| VecCode::from_code(&code))
            .transpose()
            .map_err(|error| invalid_choice("vec", &error))?;
        let exam_type = text(parameters, "exam_type")
            .map(|code| ExamType::from_code(&code))
            .transpose()
            .map_err(|error| invalid_choice("exam_type", &error))?;
        let start_date = text(parameters, "start_date").unwrap_or_else(|| {
            self.clock
                .utc()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        });

        Ok(SearchFilter {
            zip_code: text(parameters, "zipcode"),
            longitude: text(parameters, "geo_long"),
            latitude: text(parameters, "geo_lat"),
            max_distance: text(parameters, "max_distance"),
            vec,
            team_id: text(parameters, "team_id"),
            start_date: Some(start_date),
            end_date: text(parameters, "end_date"),
            exam_type,
            max_fee: text(parameters, "max_fee"),
            include_full: flag(parameters, "include_full"),
        })
    }
}

fn invalid_choice(parameter: &str, error: &impl std::fmt::Display) -> SlashCommandError {
    SlashCommandError::parameter(
        FIND_EXAM_COMMAND,
        parameter,
        ParameterProblem::InvalidValue(error.to_string()),
    )
}

fn post_visibility(parameters: &Parameters) -> Visibility {
    Visibility::from_post_flag(flag(parameters, "post"))
}

/// Reads a parameter as text; blank and missing values are unset.
fn text(parameters: &Parameters, name: &str) -> Option<String> {
    match parameters.get(name)? {
        Value::String(value) => Some(value.trim())
            .filter(|trimmed| !trimmed.is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

fn flag(parameters: &Parameters, name: &str) -> bool {
    matches!(parameters.get(name), Some(Value::Bool(true)))
}
