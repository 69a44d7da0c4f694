//! Restcheck Domain - Core harness types
//!
//! This crate defines the domain model for the restcheck BDD harness:
//! the closed set of API endpoints, request specifications, response
//! representations, and structural JSON comparison. All types here are
//! pure Rust with no I/O dependencies.

pub mod compare;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod request;
pub mod response;

pub use compare::{first_element_or_whole, json_equal, mismatch};
pub use endpoint::Endpoint;
pub use error::{DomainError, DomainResult};
pub use method::Method;
pub use request::{BodyTable, PathSuffix, QueryParams, RequestSpec};
pub use response::ApiResponse;
