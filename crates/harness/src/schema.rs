//! JSON Schema validation.
//!
//! Delegates to the `jsonschema` crate; a failing validation reports
//! every mismatch with its instance path.

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{HarnessError, HarnessResult};

/// Validates an instance against a schema document.
///
/// # Errors
///
/// Returns [`HarnessError::SchemaCompile`] when the schema document is
/// not itself a valid JSON Schema, and [`HarnessError::Assertion`] with
/// one line per validation error when the instance does not conform.
pub fn check(schema: &Value, instance: &Value) -> HarnessResult<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| HarnessError::SchemaCompile(e.to_string()))?;

    if let Err(errors) = compiled.validate(instance) {
        let details: Vec<String> = errors
            .map(|e| format!("{} (at instance path '{}')", e, e.instance_path))
            .collect();
        return Err(HarnessError::Assertion(format!(
            "schema validation failed:\n  - {}",
            details.join("\n  - ")
        )));
    }
    Ok(())
}
