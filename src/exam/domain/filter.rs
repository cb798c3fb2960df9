//! Exam session search filters.

use super::{ExamType, VecCode};

/// Optional criteria for an exam session search.
///
/// `None` is the only "unset" marker: a field left as `None` is omitted from
/// the outbound query, while `Some` is always forwarded. Callers reading
/// free-form input are expected to turn blank strings into `None` before
/// building a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// ZIP code to search near.
    pub zip_code: Option<String>,
    /// Longitude to search near.
    pub longitude: Option<String>,
    /// Latitude to search near.
    pub latitude: Option<String>,
    /// Maximum distance from the origin, in miles.
    pub max_distance: Option<String>,
    /// Restrict results to one VEC.
    pub vec: Option<VecCode>,
    /// Restrict results to one team.
    pub team_id: Option<String>,
    /// Earliest exam date (ISO 8601).
    pub start_date: Option<String>,
    /// Latest exam date (ISO 8601).
    pub end_date: Option<String>,
    /// Remote, in-person, or both.
    pub exam_type: Option<ExamType>,
    /// Maximum session fee.
    pub max_fee: Option<String>,
    /// Include sessions that are already full.
    pub include_full: bool,
}

impl SearchFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ZIP code.
    #[must_use]
    pub fn with_zip_code(mut self, value: impl Into<String>) -> Self {
        self.zip_code = Some(value.into());
        self
    }

    /// Sets the search origin from longitude and latitude.
    #[must_use]
    pub fn with_coordinates(
        mut self,
        longitude: impl Into<String>,
        latitude: impl Into<String>,
    ) -> Self {
        self.longitude = Some(longitude.into());
        self.latitude = Some(latitude.into());
        self
    }

    /// Sets the maximum distance in miles.
    #[must_use]
    pub fn with_max_distance(mut self, value: impl Into<String>) -> Self {
        self.max_distance = Some(value.into());
        self
    }

    /// Restricts the search to one VEC.
    #[must_use]
    pub const fn with_vec(mut self, vec: VecCode) -> Self {
        self.vec = Some(vec);
        self
    }

    /// Restricts the search to one team.
    #[must_use]
    pub fn with_team_id(mut self, value: impl Into<String>) -> Self {
        self.team_id = Some(value.into());
        self
    }

    /// Sets the earliest exam date.
    #[must_use]
    pub fn with_start_date(mut self, value: impl Into<String>) -> Self {
        self.start_date = Some(value.into());
        self
    }

    /// Sets the latest exam date.
    #[must_use]
    pub fn with_end_date(mut self, value: impl Into<String>) -> Self {
        self.end_date = Some(value.into());
        self
    }

    /// Restricts the delivery type.
    #[must_use]
    pub const fn with_exam_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = Some(exam_type);
        self
    }

    /// Sets the maximum fee.
    #[must_use]
    pub fn with_max_fee(mut self, value: impl Into<String>) -> Self {
        self.max_fee = Some(value.into());
        self
    }

    /// Includes or excludes full sessions.
    #[must_use]
    pub const fn with_include_full(mut self, include_full: bool) -> Self {
        self.include_full = include_full;
        self
    }
}
