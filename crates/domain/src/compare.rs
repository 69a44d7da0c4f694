//! Structural JSON comparison.
//!
//! All body assertions compare parsed `serde_json::Value`s, never raw
//! text, so key order and whitespace differences are ignored. This is
//! the single canonical equality semantics for the harness.

use serde_json::Value;

/// Structural equality on parsed JSON values.
///
/// `serde_json::Value` equality is already structural (object key order
/// is irrelevant); this wrapper names the semantics at call sites.
#[must_use]
pub fn json_equal(left: &Value, right: &Value) -> bool {
    left == right
}

/// Normalizes a value for the cross-response identity check: arrays
/// compare by their first element only, everything else compares whole.
///
/// Returns `None` for an empty array, which callers report as a mismatch
/// rather than a crash.
#[must_use]
pub fn first_element_or_whole(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Renders a diff-style expected/actual mismatch message.
#[must_use]
pub fn mismatch(
    what: &str,
    expected: &impl std::fmt::Display,
    actual: &impl std::fmt::Display,
) -> String {
    format!("{what} mismatch:\n  expected: {expected}\n    actual: {actual}")
}
