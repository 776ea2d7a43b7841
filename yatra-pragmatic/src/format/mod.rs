//! This module defines logic to serialize/deserialize trip requests and attraction catalogs in
//! pragmatic format from json input and to write itineraries.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

extern crate serde_json;

use serde::Serialize;
use std::fmt;

pub mod catalog;
pub mod itinerary;
pub mod request;

/// A format error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("cannot serialize error: '{err}'"))
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps track of multiple format errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|err| format!("cannot serialize errors: '{err}'"))
    }

    /// Returns an iterator over inner errors.
    pub fn iter(&self) -> impl Iterator<Item = &FormatError> + '_ {
        self.errors.iter()
    }

    /// Returns true if there is an error with given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|err| err.code == code)
    }

    /// Formats multiple format errors into string.
    pub fn format_many(&self, separator: &str) -> String {
        self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format_many("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

/// Creates a deserialization error for the given entity.
pub(crate) fn create_deserialize_error(code: &str, entity: &str, err: serde_json::Error) -> MultiFormatError {
    FormatError::new(code.to_string(), format!("cannot deserialize {entity}"), format!("check input json: '{err}'"))
        .into()
}
