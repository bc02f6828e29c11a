//! Synchronous migration operations against any [`DocumentStore`].
//!
//! Each operation is one read followed by at most one conditional write. The
//! store handle is passed in explicitly; [`super::Migrator`] wraps these for
//! async callers.

use jiff::Timestamp;
use log::{info, warn};
use serde_json::{Map, Value};

use crate::{
    error::{OnboardError, Result},
    merge::{discriminant_of, extract_steps, merge},
    models::{Document, Step, StepProgress, StepStatus, STEPS_FIELD},
    params::{DocumentRef, MigrateSteps, SetStepStatus},
    store::DocumentStore,
};

/// What a migration did (or would do, for a dry run).
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationOutcome {
    /// Migrated document
    pub document: DocumentRef,
    /// Discriminant whose steps were replaced
    pub discriminant: String,
    /// Newly inserted steps, in display order
    pub inserted: Vec<Step>,
    /// Number of existing steps removed
    pub removed: usize,
    /// Number of existing steps kept
    pub kept: usize,
    /// Document version after the write, `None` for dry runs
    pub version: Option<u64>,
}

impl MigrationOutcome {
    /// Whether the merged list was written back.
    pub fn written(&self) -> bool {
        self.version.is_some()
    }
}

/// Typed view of a document's step list.
#[derive(Debug, Clone, PartialEq)]
pub struct StepListing {
    /// Listed document
    pub document: DocumentRef,
    /// Steps in display order
    pub steps: Vec<Step>,
    /// Completion across all steps
    pub progress: StepProgress,
}

/// Replaces the steps tagged with the set's discriminant and writes the
/// document back, conditional on the version that was read.
pub fn migrate_steps<S: DocumentStore>(
    store: &mut S,
    params: &MigrateSteps,
    now: Timestamp,
) -> Result<MigrationOutcome> {
    let MigrateSteps {
        document: target,
        replacements,
        dry_run,
    } = params;
    replacements.validate()?;

    let mut document = store.get_document(&target.collection, &target.id)?;
    let existing = extract_steps(&document.fields)?;
    let existing_len = existing.len();

    let inserted = replacements.stamp(now);
    let merged = merge(existing, &replacements.discriminant, &inserted)?;

    let kept = merged.len() - inserted.len();
    let removed = existing_len - kept;
    info!(
        "Replacing {removed} '{}' step(s) with {} on {}/{}, keeping {kept}",
        replacements.discriminant,
        inserted.len(),
        target.collection,
        target.id
    );

    let version = if *dry_run {
        info!("Dry run, document left unchanged");
        None
    } else {
        document
            .fields
            .insert(STEPS_FIELD.to_string(), Value::Array(merged));
        Some(store.update_document(&document)?)
    };

    Ok(MigrationOutcome {
        document: target.clone(),
        discriminant: replacements.discriminant.clone(),
        inserted,
        removed,
        kept,
        version,
    })
}

/// Reads the document's steps as typed records.
pub fn list_steps<S: DocumentStore>(store: &S, target: &DocumentRef) -> Result<StepListing> {
    let document = store.get_document(&target.collection, &target.id)?;
    let steps = extract_steps(&document.fields)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            discriminant_of(index, &record)?;
            serde_json::from_value::<Step>(record)
                .map_err(|e| OnboardError::malformed(index, e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StepListing {
        document: target.clone(),
        progress: StepProgress::from_steps(&steps),
        steps,
    })
}

/// Sets the status of every step whose `id` matches and refreshes its
/// `updated_at`. Returns the number of steps changed.
pub fn set_step_status<S: DocumentStore>(
    store: &mut S,
    params: &SetStepStatus,
    now: Timestamp,
) -> Result<usize> {
    if params.status == StepStatus::Other {
        return Err(OnboardError::invalid_input("status")
            .with_reason("must be one of todo, in_progress, done"));
    }

    let target = &params.document;
    let mut document = store.get_document(&target.collection, &target.id)?;
    let mut steps = extract_steps(&document.fields)?;

    let mut matched = 0;
    for (index, record) in steps.iter_mut().enumerate() {
        if discriminant_of(index, record)? != params.step_id {
            continue;
        }
        if let Some(object) = record.as_object_mut() {
            object.insert(
                "status".to_string(),
                Value::String(params.status.as_str().to_string()),
            );
            object.insert("updated_at".to_string(), Value::String(now.to_string()));
            matched += 1;
        }
    }

    if matched == 0 {
        warn!("No step with ID '{}' on {}/{}", params.step_id, target.collection, target.id);
        return Err(OnboardError::StepNotFound {
            id: params.step_id.clone(),
        });
    }

    document
        .fields
        .insert(STEPS_FIELD.to_string(), Value::Array(steps));
    store.update_document(&document)?;
    info!(
        "Set {matched} '{}' step(s) to {} on {}/{}",
        params.step_id,
        params.status.as_str(),
        target.collection,
        target.id
    );

    Ok(matched)
}

/// Reads a whole document.
pub fn get_document<S: DocumentStore>(store: &S, target: &DocumentRef) -> Result<Document> {
    store.get_document(&target.collection, &target.id)
}

/// Creates or replaces a whole document from a JSON object.
pub fn put_document<S: DocumentStore>(
    store: &mut S,
    target: &DocumentRef,
    body: Value,
) -> Result<Document> {
    let fields: Map<String, Value> = match body {
        Value::Object(fields) => fields,
        _ => {
            return Err(
                OnboardError::invalid_input("document").with_reason("must be a JSON object")
            )
        }
    };
    store.put_document(&target.collection, &target.id, fields)
}
