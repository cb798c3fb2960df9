//! Exam session records returned by the session search endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::RenderError;

/// Team identifier as returned by HamStudy, which may be text or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamId {
    /// Text identifier.
    Text(String),
    /// Numeric identifier.
    Number(i64),
}

impl fmt::Display for TeamId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => formatter.write_str(value),
            Self::Number(value) => write!(formatter, "{value}"),
        }
    }
}

/// One scheduled exam session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSession {
    /// Site-relative path of the session's info page.
    #[serde(rename = "infoLink")]
    pub info_link: String,
    /// Organising team.
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    /// Session start, as `YYYY-MM-DDTHH:MM:SS.000Z`.
    pub date: String,
    /// Whether the session is held online.
    #[serde(default)]
    pub online_session: bool,
    /// Street address; only meaningful for in-person sessions.
    #[serde(default)]
    pub formatted_addr: Option<String>,
    /// Whether candidates must register in advance.
    #[serde(default)]
    pub prereg_required: bool,
    /// VEC wire code.
    pub vec: String,
    /// Session fee in US dollars.
    #[serde(default)]
    pub test_fee: f64,
}

impl ExamSession {
    /// Returns where the session takes place.
    ///
    /// Online sessions report `Online`; in-person sessions report their
    /// address, or `Unknown` when HamStudy omitted it.
    #[must_use]
    pub fn location(&self) -> &str {
        if self.online_session {
            return "Online";
        }
        self.formatted_addr
            .as_deref()
            .filter(|address| !address.is_empty())
            .unwrap_or("Unknown")
    }
}

/// One entry of a session search response, kept as raw JSON.
///
/// Records are decoded into [`ExamSession`] only when rendered, so a broken
/// entry past the display limit never fails a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord(Value);

impl SessionRecord {
    /// Decodes the entry into a typed session.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MalformedSession`] when a required field is
    /// missing or has the wrong type.
    pub fn decode(&self) -> Result<ExamSession, RenderError> {
        ExamSession::deserialize(&self.0)
            .map_err(|err| RenderError::MalformedSession(err.to_string()))
    }
}

impl From<Value> for SessionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
