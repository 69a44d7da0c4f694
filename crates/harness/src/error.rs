//! Harness error types.
//!
//! Assertion failures and infrastructure failures are distinct variants:
//! a failed expectation reports expected vs. actual, while a missing
//! fixture, an out-of-range fixture index, or a too-short response
//! history is a precondition violation with its own error kind.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A domain-level failure (unknown endpoint, malformed JSON body, ...).
    #[error(transparent)]
    Domain(#[from] restcheck_domain::DomainError),

    /// The configured base URL and request path did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The HTTP call itself failed (connect, TLS, read).
    #[error("HTTP request to {url} failed: {message}")]
    Http {
        /// The URL that was being requested.
        url: String,
        /// The underlying client error.
        message: String,
    },

    /// A fixture file does not exist at its derived path.
    #[error("fixture not found: {}", path.display())]
    FixtureNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// A fixture file exists but could not be read or parsed as JSON.
    #[error("fixture {} is unreadable: {message}", path.display())]
    FixtureUnreadable {
        /// The offending fixture path.
        path: PathBuf,
        /// Read or parse error detail.
        message: String,
    },

    /// A 1-based fixture index points past the end of the fixture array.
    #[error("fixture index {index} out of bounds for array of {len} elements")]
    FixtureIndexOutOfBounds {
        /// The requested 1-based index.
        index: usize,
        /// The fixture array length.
        len: usize,
    },

    /// A schema fixture is not itself a valid JSON Schema.
    #[error("schema did not compile: {0}")]
    SchemaCompile(String),

    /// A step inspected the current response before any request was made.
    #[error("no response recorded yet in this scenario")]
    NoResponses,

    /// The identity check needs two responses but the history is shorter.
    #[error("insufficient response history: need 2 responses, have {have}")]
    InsufficientHistory {
        /// How many responses the scenario has recorded.
        have: usize,
    },

    /// An expectation did not hold; the message carries the diff.
    #[error("{0}")]
    Assertion(String),
}

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
