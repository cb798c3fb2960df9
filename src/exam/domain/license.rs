//! Sparse ULS licence records and lookup identifiers.

use super::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A callsign or FRN to look up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupId(String);

impl LookupId {
    /// Creates a lookup identifier from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyLookupId`] when the input is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, QueryError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyLookupId);
        }
        Ok(Self(trimmed))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A licence record keyed by ULS field name.
///
/// Every field is optional. A missing key, a JSON `null`, and an empty
/// string are all treated as "not present" by [`LicenseRecord::text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseRecord {
    fields: BTreeMap<String, Value>,
}

impl LicenseRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the display text for a field, or `None` when it is not
    /// present.
    ///
    /// Booleans display as `Yes`/`No`; numbers and nested values display in
    /// their JSON form.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(present_text)
    }

    /// Reports whether a field is present.
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.text(name).is_some()
    }
}

fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(yes_no(*flag).to_owned()),
        Value::Number(number) => Some(number.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}

/// Formats a flag for display.
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
