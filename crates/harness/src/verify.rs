//! Response verification.
//!
//! One check per `Then` step. Every comparison operates on parsed JSON
//! values, so key order and whitespace never matter. Failures report a
//! diff-style expected/actual message; precondition violations (missing
//! history, out-of-range fixture index) surface as their own error kinds.

use serde_json::Value;

use restcheck_domain::compare::{first_element_or_whole, json_equal, mismatch};
use restcheck_domain::ApiResponse;

use crate::context::ScenarioContext;
use crate::error::{HarnessError, HarnessResult};
use crate::fixtures::FixtureStore;
use crate::schema;

/// Executes response checks against the scenario context.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    fixtures: &'a FixtureStore,
}

impl<'a> Verifier<'a> {
    /// Creates a verifier over the given fixture store.
    #[must_use]
    pub const fn new(fixtures: &'a FixtureStore) -> Self {
        Self { fixtures }
    }

    /// The last response's status code equals `expected`.
    ///
    /// # Errors
    ///
    /// Fails with the expected and actual codes.
    pub fn status_code(&self, ctx: &ScenarioContext, expected: u16) -> HarnessResult<()> {
        let actual = ctx.last()?.status;
        if actual == expected {
            Ok(())
        } else {
            Err(HarnessError::Assertion(mismatch(
                "status code",
                &expected,
                &actual,
            )))
        }
    }

    /// The last response body conforms to the named schema fixture.
    ///
    /// # Errors
    ///
    /// Fails listing every schema violation; fixture problems surface as
    /// infrastructure errors.
    pub fn matches_schema(&self, ctx: &ScenarioContext, name: &str) -> HarnessResult<()> {
        let schema = self.fixtures.schema(name)?;
        let body = ctx.last()?.json()?;
        schema::check(&schema, &body)
    }

    /// The last response body is a JSON array with exactly `expected`
    /// elements.
    ///
    /// # Errors
    ///
    /// Fails with both lengths, or when the body is not an array.
    pub fn array_len(&self, ctx: &ScenarioContext, expected: usize) -> HarnessResult<()> {
        let actual = ctx.last()?.json_array()?.len();
        if actual == expected {
            Ok(())
        } else {
            Err(HarnessError::Assertion(mismatch(
                "results array length",
                &expected,
                &actual,
            )))
        }
    }

    /// The last response body structurally equals the named
    /// expected-response fixture.
    ///
    /// # Errors
    ///
    /// Fails with both documents rendered as JSON.
    pub fn matches_fixture(&self, ctx: &ScenarioContext, name: &str) -> HarnessResult<()> {
        let expected = self.fixtures.expected_response(name)?;
        let actual = ctx.last()?.json()?;
        Self::expect_equal("response body", &expected, &actual)
    }

    /// The last response body structurally equals the element at the
    /// given 1-based index of the named array fixture.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FixtureIndexOutOfBounds`] for an index
    /// past the fixture's end, and an assertion failure when the fixture
    /// is not an array or the element differs.
    pub fn matches_fixture_element(
        &self,
        ctx: &ScenarioContext,
        index: usize,
        name: &str,
    ) -> HarnessResult<()> {
        let fixture = self.fixtures.expected_response(name)?;
        let Value::Array(elements) = fixture else {
            return Err(HarnessError::Assertion(format!(
                "fixture '{name}' is not a JSON array; cannot index into it"
            )));
        };
        let expected = index
            .checked_sub(1)
            .and_then(|i| elements.get(i))
            .ok_or(HarnessError::FixtureIndexOutOfBounds {
                index,
                len: elements.len(),
            })?;
        let actual = ctx.last()?.json()?;
        Self::expect_equal("response body", expected, &actual)
    }

    /// The named top-level field of the last response body equals the
    /// expected value.
    ///
    /// # Errors
    ///
    /// Fails when the body is not an object, the field is absent, or the
    /// values differ.
    pub fn field_equals(
        &self,
        ctx: &ScenarioContext,
        field: &str,
        expected: &Value,
    ) -> HarnessResult<()> {
        let body = ctx.last()?.json()?;
        let Value::Object(object) = &body else {
            return Err(HarnessError::Assertion(format!(
                "response body is not a JSON object: {body}"
            )));
        };
        let actual = object.get(field).ok_or_else(|| {
            HarnessError::Assertion(format!(
                "field '{field}' not present in response body; available fields: [{}]",
                object.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;
        Self::expect_equal(&format!("field '{field}'"), expected, actual)
    }

    /// The last response body's key set equals the table's key set, and
    /// every value matches the table's string cell.
    ///
    /// Numbers compare against the cell by their canonical JSON
    /// rendering, so a cell of `1` matches the number `1`.
    ///
    /// # Errors
    ///
    /// Fails on a key-set difference or any value mismatch.
    pub fn matches_table(
        &self,
        ctx: &ScenarioContext,
        rows: &[(String, String)],
    ) -> HarnessResult<()> {
        let body = ctx.last()?.json()?;
        let Value::Object(object) = &body else {
            return Err(HarnessError::Assertion(format!(
                "response body is not a JSON object: {body}"
            )));
        };

        let actual_keys: std::collections::BTreeSet<&str> =
            object.keys().map(String::as_str).collect();
        let expected_keys: std::collections::BTreeSet<&str> =
            rows.iter().map(|(k, _)| k.as_str()).collect();
        if actual_keys != expected_keys {
            return Err(HarnessError::Assertion(mismatch(
                "response body key set",
                &format!("{expected_keys:?}"),
                &format!("{actual_keys:?}"),
            )));
        }

        for (key, expected_cell) in rows {
            // Key-set equality above guarantees presence.
            let Some(actual) = object.get(key) else {
                continue;
            };
            let rendered = match actual {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if &rendered != expected_cell {
                return Err(HarnessError::Assertion(mismatch(
                    &format!("field '{key}'"),
                    expected_cell,
                    &rendered,
                )));
            }
        }
        Ok(())
    }

    /// The last response body structurally equals `{}`.
    ///
    /// # Errors
    ///
    /// Fails with the actual body.
    pub fn empty_object(&self, ctx: &ScenarioContext) -> HarnessResult<()> {
        let actual = ctx.last()?.json()?;
        let empty = Value::Object(serde_json::Map::new());
        Self::expect_equal("response body", &empty, &actual)
    }

    /// The last two responses in the history carry the same
    /// representation: an array body compares by its first element,
    /// anything else compares whole.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InsufficientHistory`] for a history
    /// shorter than two, and an assertion failure on mismatch or when an
    /// array body is empty.
    pub fn responses_identical(&self, ctx: &ScenarioContext) -> HarnessResult<()> {
        let (previous, last) = ctx.last_two()?;
        let previous = Self::representation(previous)?;
        let last = Self::representation(last)?;
        Self::expect_equal("response bodies", &previous, &last)
    }

    fn representation(response: &ApiResponse) -> HarnessResult<Value> {
        let parsed = response.json()?;
        first_element_or_whole(&parsed).cloned().ok_or_else(|| {
            HarnessError::Assertion(
                "response body is an empty array; nothing to compare".to_string(),
            )
        })
    }

    fn expect_equal(what: &str, expected: &Value, actual: &Value) -> HarnessResult<()> {
        if json_equal(expected, actual) {
            Ok(())
        } else {
            Err(HarnessError::Assertion(mismatch(what, expected, actual)))
        }
    }
}
