//! Response representation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// An HTTP response captured by the harness: status code and raw body.
///
/// The body is kept as text; assertions parse it on demand so a non-JSON
/// body only fails the steps that actually inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response from a status code and body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidJson`] when the body is not valid JSON.
    pub fn json(&self) -> DomainResult<Value> {
        serde_json::from_str(&self.body).map_err(|e| DomainError::InvalidJson(e.to_string()))
    }

    /// Parses the body as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidJson`] for non-JSON bodies and
    /// [`DomainError::UnexpectedShape`] when the body is JSON but not an
    /// array.
    pub fn json_array(&self) -> DomainResult<Vec<Value>> {
        match self.json()? {
            Value::Array(items) => Ok(items),
            other => Err(DomainError::UnexpectedShape(format!(
                "expected a JSON array, got {}",
                type_name(&other)
            ))),
        }
    }
}

/// Human-readable name of a JSON value's type, for error messages.
#[must_use]
pub(crate) const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
