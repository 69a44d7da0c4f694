//! Restcheck Harness - request building and response verification
//!
//! The executable half of the restcheck BDD suite: an HTTP client adapter
//! over reqwest, fixture loading, JSON Schema validation, scenario-scoped
//! response history, and the response verifier that backs every `Then`
//! step. Step definitions live with the cucumber runner under `tests/`.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod schema;
pub mod verify;

pub use client::ApiClient;
pub use config::HarnessConfig;
pub use context::ScenarioContext;
pub use error::{HarnessError, HarnessResult};
pub use fixtures::FixtureStore;
pub use verify::Verifier;
