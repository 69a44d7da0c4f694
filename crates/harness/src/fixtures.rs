//! Fixture loading.
//!
//! Fixtures live at predictable paths derived from the human-readable
//! name in step text: spaces are stripped and a role suffix is appended,
//! so "Posts By User 1" becomes `PostsByUser1Response.json`. A missing
//! file is an infrastructure error, not an assertion failure.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// Loads schema and expected-response fixtures by display name.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    schemas_dir: PathBuf,
    responses_dir: PathBuf,
}

impl FixtureStore {
    /// Creates a store over the configured fixture directories.
    #[must_use]
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            schemas_dir: config.schemas_dir.clone(),
            responses_dir: config.responses_dir.clone(),
        }
    }

    /// Derives a file stem from a display name by stripping spaces.
    fn stem(name: &str) -> String {
        name.replace(' ', "")
    }

    /// Path of the schema fixture for a display name.
    #[must_use]
    pub fn schema_path(&self, name: &str) -> PathBuf {
        self.schemas_dir.join(format!("{}Schema.json", Self::stem(name)))
    }

    /// Path of the expected-response fixture for a display name.
    #[must_use]
    pub fn response_path(&self, name: &str) -> PathBuf {
        self.responses_dir
            .join(format!("{}Response.json", Self::stem(name)))
    }

    /// Loads the schema fixture named in step text.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FixtureNotFound`] or
    /// [`HarnessError::FixtureUnreadable`].
    pub fn schema(&self, name: &str) -> HarnessResult<Value> {
        Self::load(&self.schema_path(name))
    }

    /// Loads the expected-response fixture named in step text.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FixtureNotFound`] or
    /// [`HarnessError::FixtureUnreadable`].
    pub fn expected_response(&self, name: &str) -> HarnessResult<Value> {
        Self::load(&self.response_path(name))
    }

    fn load(path: &Path) -> HarnessResult<Value> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                HarnessError::FixtureNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                HarnessError::FixtureUnreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;
        serde_json::from_str(&text).map_err(|e| HarnessError::FixtureUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
