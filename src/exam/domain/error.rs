//! Error types for exam query construction and response rendering.

use std::fmt;
use thiserror::Error;

/// Date filter that failed ISO 8601 validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// Earliest exam date to include.
    Start,
    /// Latest exam date to include.
    End,
}

impl DateField {
    /// Returns the human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start date",
            Self::End => "End date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Errors raised while validating user-supplied search input.
///
/// These are resolved locally and never reach the remote service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A date filter is not an ISO 8601 date or date-time.
    #[error("{field} '{value}' is not an ISO 8601 date or date-time")]
    InvalidDateFormat {
        /// Which filter was rejected.
        field: DateField,
        /// The rejected input.
        value: String,
    },

    /// A licence lookup was requested without an identifier.
    #[error("lookup id must not be empty")]
    EmptyLookupId,
}

/// Data-integrity errors raised while rendering remote records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A session names a VEC outside the known enumeration.
    #[error("unknown VEC code '{0}'")]
    UnknownVecCode(String),

    /// A timestamp does not match `YYYY-MM-DDTHH:MM:SS.000Z`.
    #[error("malformed timestamp '{0}': expected YYYY-MM-DDTHH:MM:SS.000Z")]
    MalformedTimestamp(String),

    /// A session entry does not have the expected fields.
    #[error("malformed session record: {0}")]
    MalformedSession(String),

    /// The field body template failed to render.
    #[error("template rendering failed: {0}")]
    Template(String),
}

impl From<ParseVecCodeError> for RenderError {
    fn from(err: ParseVecCodeError) -> Self {
        Self::UnknownVecCode(err.0)
    }
}

/// Error returned while parsing a VEC wire code or label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown VEC code: {0}")]
pub struct ParseVecCodeError(pub String);

/// Error returned while parsing an exam type wire code or label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown exam type: {0}")]
pub struct ParseExamTypeError(pub String);
