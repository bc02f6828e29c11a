//! Document store collaborator and its SQLite implementation.
//!
//! The migration only needs to read one document and write it back, so the
//! collaborator surface is deliberately small. [`SqliteStore`] keeps documents
//! as JSON text keyed by `(collection, id)` with a version counter that makes
//! every update conditional on the revision that was read.

use serde_json::{Map, Value};

use crate::{error::Result, models::Document};

mod queries;
mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

/// Minimal document database interface used by the migrator.
pub trait DocumentStore {
    /// Fetches a document, failing with
    /// [`crate::OnboardError::DocumentNotFound`] when absent.
    fn get_document(&self, collection: &str, id: &str) -> Result<Document>;

    /// Writes `document.fields` back if the stored version still equals
    /// `document.version`. Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns `OnboardError::VersionConflict` when another writer got there
    /// first, `OnboardError::DocumentNotFound` when the document vanished and
    /// `OnboardError::Write` when the update itself fails.
    fn update_document(&mut self, document: &Document) -> Result<u64>;

    /// Creates or replaces a document unconditionally.
    fn put_document(
        &mut self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<Document>;
}
