//! Parameter structures for migration operations.
//!
//! These structures are shared between interfaces without framework-specific
//! derives. The CLI defines its own clap argument types and converts them into
//! these via `From` implementations, keeping clap out of the core crate.

use serde::{Deserialize, Serialize};

use crate::models::{ReplacementSet, StepStatus};

/// Collection used when none is specified.
pub const DEFAULT_COLLECTION: &str = "companies";

/// Identifies one document in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRef {
    /// Collection containing the document
    pub collection: String,
    /// Document identifier
    pub id: String,
}

impl DocumentRef {
    /// Creates a reference to `id` in `collection`.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

/// Parameters for replacing the steps of one discriminant.
#[derive(Debug, Clone)]
pub struct MigrateSteps {
    /// Target document
    pub document: DocumentRef,
    /// Discriminant and replacement steps
    pub replacements: ReplacementSet,
    /// Compute and report the result without writing it
    pub dry_run: bool,
}

/// Parameters for changing the status of the steps sharing an ID.
#[derive(Debug, Clone)]
pub struct SetStepStatus {
    /// Target document
    pub document: DocumentRef,
    /// Step discriminant to update
    pub step_id: String,
    /// New status
    pub status: StepStatus,
}
