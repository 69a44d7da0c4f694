//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or inspecting
/// requests and responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not part of the harness vocabulary.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The endpoint name is not part of the fixed endpoint set.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// The response body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    /// The response body parsed, but has the wrong JSON shape.
    #[error("unexpected body shape: {0}")]
    UnexpectedShape(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
