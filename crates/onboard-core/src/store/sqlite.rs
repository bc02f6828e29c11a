//! SQLite-backed document store.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

/// Document store persisting JSON documents in a SQLite database.
pub struct SqliteStore {
    pub(super) connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening document store at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Opens a private in-memory store.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}
