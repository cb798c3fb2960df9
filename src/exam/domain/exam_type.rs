//! Exam delivery type filter.

use super::ParseExamTypeError;
use std::fmt;

/// How an exam session is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamType {
    /// Remote (online) sessions only.
    Remote,
    /// In-person sessions only.
    InPerson,
    /// Both remote and in-person sessions.
    All,
}

impl ExamType {
    /// Every exam type, in display order.
    pub const ALL: [Self; 3] = [Self::Remote, Self::InPerson, Self::All];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::InPerson => "In-Person",
            Self::All => "All",
        }
    }

    /// Returns the lowercase code used by the HamStudy API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::InPerson => "inperson",
            Self::All => "all",
        }
    }

    /// Looks up an exam type by its wire code.
    ///
    /// # Errors
    ///
    /// Returns [`ParseExamTypeError`] for codes outside the enumeration.
    pub fn from_code(code: &str) -> Result<Self, ParseExamTypeError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.code() == code)
            .ok_or_else(|| ParseExamTypeError(code.to_owned()))
    }

    /// Looks up an exam type by its display label.
    ///
    /// # Errors
    ///
    /// Returns [`ParseExamTypeError`] when no exam type carries the label.
    pub fn from_label(label: &str) -> Result<Self, ParseExamTypeError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label() == label)
            .ok_or_else(|| ParseExamTypeError(label.to_owned()))
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl TryFrom<&str> for ExamType {
    type Error = ParseExamTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}
