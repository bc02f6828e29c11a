//! Builder for creating and configuring Migrator instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Migrator;
use crate::{
    error::{OnboardError, Result},
    store::SqliteStore,
};

/// Builder for creating and configuring Migrator instances.
#[derive(Debug, Clone, Default)]
pub struct MigratorBuilder {
    database_path: Option<PathBuf>,
}

impl MigratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/onboard/documents.db` or
    /// `~/.local/share/onboard/documents.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured migrator, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `OnboardError::FileSystem` if the parent directory cannot be
    /// created and `OnboardError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Migrator> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OnboardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Using document store {}", db_path.display());
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || SqliteStore::open(&db_path_clone).map(drop))
            .await
            .map_err(OnboardError::join)??;

        Ok(Migrator::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("onboard")
            .place_data_file("documents.db")
            .map_err(|e| OnboardError::XdgDirectory(e.to_string()))
    }
}
