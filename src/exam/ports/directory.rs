//! Exam directory port.
//!
//! The directory is the remote HamStudy service: session search and ULS
//! licence lookup.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::exam::domain::{LicenseRecord, LookupId, SessionQuery, SessionRecord};

/// Result type for exam directory operations.
pub type ExamDirectoryResult<T> = Result<T, ExamDirectoryError>;

/// Outcome of a licence lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseLookup {
    /// The directory returned a record.
    Found(LicenseRecord),
    /// The directory has no record for the identifier.
    NotFound,
}

/// Remote exam directory contract.
#[async_trait]
pub trait ExamDirectory: Send + Sync {
    /// Searches for exam sessions, in the order the directory ranks them.
    ///
    /// Entries are returned undecoded; only the list shape is checked.
    async fn find_sessions(
        &self,
        query: &SessionQuery,
    ) -> ExamDirectoryResult<Vec<SessionRecord>>;

    /// Looks up a licence by callsign or FRN.
    async fn lookup_license(&self, lookup_id: &LookupId) -> ExamDirectoryResult<LicenseLookup>;
}

/// Transport-level failures talking to the exam directory.
#[derive(Debug, Clone, Error)]
pub enum ExamDirectoryError {
    /// The request could not be completed (connection refused, timeout).
    #[error("exam directory request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The directory answered with a non-success status.
    #[error("exam directory returned HTTP status {0}")]
    Status(u16),

    /// The response body was not JSON of the expected overall shape.
    #[error("exam directory response could not be decoded: {0}")]
    Decode(String),

    /// The configured base URL cannot carry path segments.
    #[error("exam directory base URL '{0}' cannot be extended with a path")]
    InvalidEndpoint(String),
}

impl ExamDirectoryError {
    /// Wraps a transport error from an adapter.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
