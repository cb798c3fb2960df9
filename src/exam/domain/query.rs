//! Outbound query construction for the session search endpoint.

use super::{DateField, QueryError, SearchFilter, is_iso_8601};
use std::fmt;

/// Wire name of the ZIP code parameter.
pub const ZIP: &str = "zip";
/// Wire name of the longitude parameter.
pub const GEO_LONG: &str = "geo.long";
/// Wire name of the latitude parameter.
pub const GEO_LAT: &str = "geo.lat";
/// Wire name of the maximum distance parameter.
pub const MAX_DISTANCE: &str = "maxDistance";
/// Wire name of the VEC parameter.
pub const VEC: &str = "vec";
/// Wire name of the team parameter.
pub const TEAM: &str = "team";
/// Wire name of the start date parameter.
pub const START_DATE: &str = "startDate";
/// Wire name of the end date parameter.
pub const END_DATE: &str = "endDate";
/// Wire name of the exam type parameter.
pub const EXAM_TYPE: &str = "type";
/// Wire name of the maximum fee parameter.
pub const MAX_FEE: &str = "maxFee";
/// Wire name of the include-full flag.
pub const INCLUDE_FULL: &str = "includeFull";

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Free-form or enumerated text.
    Text(String),
    /// Boolean flag, encoded as `true`/`false`.
    Flag(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => formatter.write_str(value),
            Self::Flag(value) => write!(formatter, "{value}"),
        }
    }
}

/// Compact parameter set for one session search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionQuery {
    parameters: Vec<(&'static str, QueryValue)>,
}

impl SessionQuery {
    /// Returns the value for a wire-level parameter name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.parameters
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Reports whether the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates parameter names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters.iter().map(|(key, _)| *key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Reports whether no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns `(name, value)` pairs ready for URL query encoding.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.parameters
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    fn push_text(&mut self, name: &'static str, value: Option<String>) {
        if let Some(text) = value {
            self.parameters.push((name, QueryValue::Text(text)));
        }
    }

    fn push_flag(&mut self, name: &'static str, value: bool) {
        self.parameters.push((name, QueryValue::Flag(value)));
    }
}

/// Builds the outbound session query from a search filter.
///
/// Dates are validated before anything else so a malformed date never
/// reaches the network. Unset fields are omitted; `includeFull` is always
/// emitted.
///
/// # Errors
///
/// Returns [`QueryError::InvalidDateFormat`] when `start_date` or `end_date`
/// is not ISO 8601.
///
/// # Examples
///
/// ```
/// use hamstudy_bot::exam::domain::{SearchFilter, VecCode, build_session_query};
///
/// let query = build_session_query(SearchFilter::new().with_vec(VecCode::Arrl))
///     .expect("filter without dates is valid");
/// assert_eq!(query.get("vec").map(ToString::to_string), Some("arrl".to_owned()));
/// assert!(!query.contains("zip"));
/// assert!(query.contains("includeFull"));
/// ```
pub fn build_session_query(filter: SearchFilter) -> Result<SessionQuery, QueryError> {
    validate_date(DateField::Start, filter.start_date.as_deref())?;
    validate_date(DateField::End, filter.end_date.as_deref())?;

    let mut query = SessionQuery::default();
    query.push_text(ZIP, filter.zip_code);
    query.push_text(GEO_LONG, filter.longitude);
    query.push_text(GEO_LAT, filter.latitude);
    query.push_text(MAX_DISTANCE, filter.max_distance);
    query.push_text(VEC, filter.vec.map(|vec| vec.code().to_owned()));
    query.push_text(TEAM, filter.team_id);
    query.push_text(START_DATE, filter.start_date);
    query.push_text(END_DATE, filter.end_date);
    query.push_text(
        EXAM_TYPE,
        filter.exam_type.map(|exam_type| exam_type.code().to_owned()),
    );
    query.push_text(MAX_FEE, filter.max_fee);
    query.push_flag(INCLUDE_FULL, filter.include_full);
    Ok(query)
}

fn validate_date(field: DateField, value: Option<&str>) -> Result<(), QueryError> {
    match value {
        Some(text) if !is_iso_8601(text) => Err(QueryError::InvalidDateFormat {
            field,
            value: text.to_owned(),
        }),
        _ => Ok(()),
    }
}
