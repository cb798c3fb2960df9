//! Exam search and licence lookup orchestration.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::exam::{
    domain::{
        Embed, LookupId, QueryError, RenderError, SearchFilter, build_session_query,
    },
    ports::{ExamDirectory, ExamDirectoryError, LicenseLookup},
    render::{DEFAULT_SESSION_LIMIT, SessionRenderer, render_license},
};

/// Title of a session search result.
pub const SESSIONS_TITLE: &str = "Exams Found:";

/// Service-level errors for exam lookups.
#[derive(Debug, Error)]
pub enum ExamServiceError {
    /// User input failed validation; no request was made.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// The directory could not be reached or answered with an error.
    #[error(transparent)]
    Directory(#[from] ExamDirectoryError),
    /// The directory has no licence for the identifier.
    #[error("nothing found for id {0}")]
    NotFound(LookupId),
    /// The directory returned data that could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExamServiceError {
    /// Returns the message shown to the requesting user.
    ///
    /// Transport and data-integrity causes are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Query(QueryError::InvalidDateFormat { field, .. }) => format!(
                "{field} was not in an ISO 8601 compliant format. \
                 Please re-enter it in a compliant format (i.e., YYYY-MM-DD)."
            ),
            Self::Query(QueryError::EmptyLookupId) => {
                "Please provide a callsign or FRN to look up.".to_owned()
            }
            Self::Directory(ExamDirectoryError::Decode(_)) | Self::Render(_) => {
                "HamStudy returned data that could not be displayed, try again later.".to_owned()
            }
            Self::Directory(_) => "Got a connection error, try again later.".to_owned(),
            Self::NotFound(lookup_id) => format!("Unable to find anything for id: {lookup_id}"),
        }
    }
}

/// Result type for exam service operations.
pub type ExamServiceResult<T> = Result<T, ExamServiceError>;

/// Runs session searches and licence lookups against an exam directory.
#[derive(Clone)]
pub struct ExamLookupService<D>
where
    D: ExamDirectory,
{
    directory: Arc<D>,
    renderer: SessionRenderer,
    session_limit: usize,
}

impl<D> ExamLookupService<D>
where
    D: ExamDirectory,
{
    /// Creates a service linking sessions to the public HamStudy site and
    /// showing the default number of sessions.
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            renderer: SessionRenderer::default(),
            session_limit: DEFAULT_SESSION_LIMIT,
        }
    }

    /// Creates a service using configured site URL and session limit.
    #[must_use]
    pub fn from_config(directory: Arc<D>, config: &BotConfig) -> Self {
        Self {
            directory,
            renderer: SessionRenderer::new(config.site_base_url().as_str()),
            session_limit: config.session_limit(),
        }
    }

    /// Searches for exam sessions and renders the first matches.
    ///
    /// # Errors
    ///
    /// Returns [`ExamServiceError::Query`] before any request when a date
    /// filter is malformed, [`ExamServiceError::Directory`] for transport
    /// failures, and [`ExamServiceError::Render`] when a returned session
    /// cannot be rendered.
    pub async fn find_exams(&self, filter: SearchFilter) -> ExamServiceResult<Embed> {
        let query = build_session_query(filter)?;
        debug!(parameters = query.len(), "built session query");

        let sessions = self
            .directory
            .find_sessions(&query)
            .await
            .inspect_err(|err| warn!(error = %err, "session search failed"))?;

        let fields = self
            .renderer
            .render(&sessions, self.session_limit)
            .inspect_err(|err| warn!(error = %err, "session data could not be rendered"))?;

        Ok(Embed::new(SESSIONS_TITLE).with_fields(fields))
    }

    /// Looks up a licence by callsign or FRN.
    ///
    /// A not-found answer short-circuits before any rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ExamServiceError::Query`] for a blank identifier,
    /// [`ExamServiceError::NotFound`] when the directory has no record,
    /// [`ExamServiceError::Directory`] for transport failures, and
    /// [`ExamServiceError::Render`] for malformed record dates.
    pub async fn lookup_license(&self, raw_id: &str) -> ExamServiceResult<Embed> {
        let lookup_id = LookupId::new(raw_id)?;

        let record = match self
            .directory
            .lookup_license(&lookup_id)
            .await
            .inspect_err(|err| warn!(error = %err, "licence lookup failed"))?
        {
            LicenseLookup::Found(record) => record,
            LicenseLookup::NotFound => return Err(ExamServiceError::NotFound(lookup_id)),
        };

        let fields = render_license(&record)
            .inspect_err(|err| warn!(error = %err, "licence data could not be rendered"))?;

        Ok(Embed::new(format!("Data for {lookup_id}:")).with_fields(fields))
    }
}
