pub mod catalog;
pub mod exams;
pub mod lecturers;
pub mod results;
pub mod students;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::PortalError;

/// Schema validation happens here, at the repository boundary: a document
/// that does not parse into its record type is a typed error, never a panic.
fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, PortalError> {
    serde_json::from_value(value)
        .map_err(|err| PortalError::Malformed { key: key.to_string(), detail: err.to_string() })
}
