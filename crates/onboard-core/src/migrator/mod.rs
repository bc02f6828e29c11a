//! High-level migrator API.
//!
//! [`Migrator`] is the explicitly constructed handle the CLI drives. It owns
//! the database location and runs every operation from [`ops`] on tokio's
//! blocking pool against a freshly opened [`crate::store::SqliteStore`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Migrator     │    │      ops        │    │  DocumentStore  │
//! │ (async facade)  │───▶│ (read, merge,   │───▶│  (SqliteStore)  │
//! │                 │    │  cond. write)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use onboard_core::{MigratorBuilder, params::DocumentRef};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let migrator = MigratorBuilder::new()
//!     .with_database_path(Some("/tmp/onboard-docs.db"))
//!     .build()
//!     .await?;
//!
//! let listing = migrator
//!     .list_steps(&DocumentRef::new("companies", "BE93DWq1pTotszXIhSOE"))
//!     .await?;
//! println!("{} of {} steps done", listing.progress.completed, listing.progress.total);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::Timestamp;
use serde_json::Value;
use tokio::task;

pub mod builder;
pub mod ops;

#[cfg(test)]
mod tests;

pub use builder::MigratorBuilder;
pub use ops::{MigrationOutcome, StepListing};

use crate::{
    error::{OnboardError, Result},
    models::Document,
    params::{DocumentRef, MigrateSteps, SetStepStatus},
    store::SqliteStore,
};

/// Async entry point for migrations against a SQLite document store.
pub struct Migrator {
    pub(crate) db_path: PathBuf,
}

impl Migrator {
    /// Creates a migrator for an already initialized database.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Replaces the steps of one discriminant on a document.
    pub async fn migrate(&self, params: &MigrateSteps) -> Result<MigrationOutcome> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut store = SqliteStore::open(&db_path)?;
            ops::migrate_steps(&mut store, &params, Timestamp::now())
        })
        .await
        .map_err(OnboardError::join)?
    }

    /// Lists a document's steps with completion progress.
    pub async fn list_steps(&self, target: &DocumentRef) -> Result<StepListing> {
        let db_path = self.db_path.clone();
        let target = target.clone();

        task::spawn_blocking(move || {
            let store = SqliteStore::open(&db_path)?;
            ops::list_steps(&store, &target)
        })
        .await
        .map_err(OnboardError::join)?
    }

    /// Sets the status of every step sharing an ID.
    pub async fn set_step_status(&self, params: &SetStepStatus) -> Result<usize> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut store = SqliteStore::open(&db_path)?;
            ops::set_step_status(&mut store, &params, Timestamp::now())
        })
        .await
        .map_err(OnboardError::join)?
    }

    /// Reads a whole document.
    pub async fn get_document(&self, target: &DocumentRef) -> Result<Document> {
        let db_path = self.db_path.clone();
        let target = target.clone();

        task::spawn_blocking(move || {
            let store = SqliteStore::open(&db_path)?;
            ops::get_document(&store, &target)
        })
        .await
        .map_err(OnboardError::join)?
    }

    /// Creates or replaces a whole document.
    pub async fn put_document(&self, target: &DocumentRef, body: Value) -> Result<Document> {
        let db_path = self.db_path.clone();
        let target = target.clone();

        task::spawn_blocking(move || {
            let mut store = SqliteStore::open(&db_path)?;
            ops::put_document(&mut store, &target, body)
        })
        .await
        .map_err(OnboardError::join)?
    }
}
