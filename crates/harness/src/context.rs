//! Scenario-scoped response history.
//!
//! One context per scenario, passed explicitly into each handler. The
//! history accessors return explicit errors instead of indexing past the
//! end of the vector.

use restcheck_domain::ApiResponse;

use crate::error::{HarnessError, HarnessResult};

/// Per-scenario state: every response received so far, in order.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    responses: Vec<ApiResponse>,
}

impl ScenarioContext {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            responses: Vec::new(),
        }
    }

    /// Appends a response to the history.
    pub fn record(&mut self, response: ApiResponse) {
        self.responses.push(response);
    }

    /// Clears the history. Each scenario gets a fresh context, so this
    /// only matters when a context is reused outside the runner.
    pub fn reset(&mut self) {
        self.responses.clear();
    }

    /// Number of responses recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns true if no response has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The most recent response.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NoResponses`] before the first request.
    pub fn last(&self) -> HarnessResult<&ApiResponse> {
        self.responses.last().ok_or(HarnessError::NoResponses)
    }

    /// The second-to-last and last responses, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InsufficientHistory`] when fewer than two
    /// responses have been recorded.
    pub fn last_two(&self) -> HarnessResult<(&ApiResponse, &ApiResponse)> {
        match self.responses.as_slice() {
            [.., previous, last] => Ok((previous, last)),
            _ => Err(HarnessError::InsufficientHistory {
                have: self.responses.len(),
            }),
        }
    }
}
