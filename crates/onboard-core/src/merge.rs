//! Step list merging.
//!
//! [`merge`] is the pure transform at the heart of a migration: drop every
//! existing record tagged with the discriminant and prepend the replacement
//! steps. Existing records stay raw JSON objects so fields this crate does
//! not model are written back untouched.

use serde_json::{Map, Value};

use crate::{
    error::{OnboardError, Result},
    models::{Step, STEPS_FIELD},
};

/// Returns the discriminant of the record at `index`.
pub fn discriminant_of(index: usize, record: &Value) -> Result<&str> {
    let object = record
        .as_object()
        .ok_or_else(|| OnboardError::malformed(index, "record is not an object"))?;
    match object.get("id") {
        Some(Value::String(id)) => Ok(id),
        Some(_) => Err(OnboardError::malformed(index, "'id' field is not a string")),
        None => Err(OnboardError::malformed(index, "missing 'id' field")),
    }
}

/// Reads the step list from document fields.
///
/// A document without the field has no steps yet; a field that is present but
/// not an array cannot be merged.
pub fn extract_steps(fields: &Map<String, Value>) -> Result<Vec<Value>> {
    match fields.get(STEPS_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(steps)) => Ok(steps.clone()),
        Some(_) => Err(OnboardError::MalformedRecord {
            index: None,
            reason: format!("'{STEPS_FIELD}' is not an array"),
        }),
    }
}

/// Replaces every record whose `id` equals `discriminant` with
/// `replacements`.
///
/// The result is `replacements` followed by the remaining records of
/// `existing` in their original order. Every existing record is validated
/// before anything is built, so a malformed list never yields partial output.
///
/// # Examples
///
/// ```rust
/// use onboard_core::{merge::merge, models::{Step, StepStatus}};
/// use serde_json::json;
///
/// let existing = vec![
///     json!({ "id": "payment", "name": "Old", "status": "todo" }),
///     json!({ "id": "billing", "name": "Keep", "status": "done" }),
/// ];
/// let replacement = Step {
///     id: "payment".to_string(),
///     name: "New".to_string(),
///     description: String::new(),
///     status: StepStatus::Todo,
///     updated_at: "2025-03-04T13:14:50Z".to_string(),
///     donelink: None,
///     clickable: false,
/// };
///
/// let merged = merge(existing, "payment", &[replacement]).unwrap();
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0]["name"], "New");
/// assert_eq!(merged[1]["name"], "Keep");
/// ```
pub fn merge(existing: Vec<Value>, discriminant: &str, replacements: &[Step]) -> Result<Vec<Value>> {
    let mut keep = Vec::with_capacity(existing.len());
    for (index, record) in existing.iter().enumerate() {
        keep.push(discriminant_of(index, record)? != discriminant);
    }

    let mut merged = Vec::with_capacity(replacements.len() + existing.len());
    for step in replacements {
        merged.push(serde_json::to_value(step)?);
    }
    merged.extend(
        existing
            .into_iter()
            .zip(keep)
            .filter_map(|(record, keep)| keep.then_some(record)),
    );

    Ok(merged)
}
