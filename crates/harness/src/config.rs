//! Harness configuration.

use std::path::PathBuf;

/// Default base URL of the system under test.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default directory holding both fixture subdirectories, relative to the
/// harness crate root.
pub const DEFAULT_FIXTURES_DIR: &str = "tests/fixtures";

/// Configuration for one harness instance.
///
/// Defaults target the public JSONPlaceholder host with fixtures under
/// `tests/fixtures/`; both can be overridden through the environment so
/// the suite can run against a local stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URL requests are issued against, without a trailing slash.
    pub base_url: String,
    /// Directory holding `<Name>Schema.json` fixtures.
    pub schemas_dir: PathBuf,
    /// Directory holding `<Name>Response.json` fixtures.
    pub responses_dir: PathBuf,
}

impl HarnessConfig {
    /// Builds a configuration from a base URL and a fixtures root
    /// containing `schemas/` and `expected_responses/` subdirectories.
    #[must_use]
    pub fn new(base_url: impl Into<String>, fixtures_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into();
        let fixtures_dir = fixtures_dir.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            schemas_dir: fixtures_dir.join("schemas"),
            responses_dir: fixtures_dir.join("expected_responses"),
        }
    }

    /// Builds the default configuration, honoring `RESTCHECK_BASE_URL`
    /// and `RESTCHECK_FIXTURES_DIR` environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RESTCHECK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let fixtures_dir = std::env::var("RESTCHECK_FIXTURES_DIR")
            .unwrap_or_else(|_| DEFAULT_FIXTURES_DIR.to_string());
        Self::new(base_url, fixtures_dir)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_FIXTURES_DIR)
    }
}
