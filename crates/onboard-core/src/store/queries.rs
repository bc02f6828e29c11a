//! Document CRUD queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension};
use serde_json::{Map, Value};

use super::{DocumentStore, SqliteStore};
use crate::{
    error::{DatabaseResultExt, OnboardError, Result, WriteResultExt},
    models::Document,
};

const SELECT_DOCUMENT_SQL: &str =
    "SELECT body, version FROM documents WHERE collection = ?1 AND id = ?2";
const SELECT_VERSION_SQL: &str =
    "SELECT version FROM documents WHERE collection = ?1 AND id = ?2";
const UPDATE_DOCUMENT_SQL: &str = "UPDATE documents SET body = ?1, version = version + 1, updated_at = ?2 WHERE collection = ?3 AND id = ?4 AND version = ?5";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (collection, id, body, version, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?4) ON CONFLICT(collection, id) DO UPDATE SET body = excluded.body, version = documents.version + 1, updated_at = excluded.updated_at";

impl SqliteStore {
    /// Parses a stored body into a field map.
    fn parse_body(body: &str) -> Result<Map<String, Value>> {
        match serde_json::from_str(body)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(OnboardError::Configuration {
                message: "Stored document body is not a JSON object".to_string(),
            }),
        }
    }
}

impl DocumentStore for SqliteStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Document> {
        debug!("Reading document {collection}/{id}");
        let row: Option<(String, i64)> = self
            .connection
            .query_row(SELECT_DOCUMENT_SQL, params![collection, id], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .db_context("Failed to read document")?;

        let (body, version) = row.ok_or_else(|| OnboardError::DocumentNotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        })?;

        Ok(Document {
            collection: collection.to_string(),
            id: id.to_string(),
            version: version as u64,
            fields: Self::parse_body(&body)?,
        })
    }

    fn update_document(&mut self, document: &Document) -> Result<u64> {
        debug!(
            "Writing document {}/{} at version {}",
            document.collection, document.id, document.version
        );
        let body = serde_json::to_string(&document.fields)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .write_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_DOCUMENT_SQL,
                params![
                    body,
                    now,
                    document.collection,
                    document.id,
                    document.version as i64
                ],
            )
            .write_context("Failed to update document")?;

        if changed == 0 {
            let found: Option<i64> = tx
                .query_row(
                    SELECT_VERSION_SQL,
                    params![document.collection, document.id],
                    |row| row.get(0),
                )
                .optional()
                .db_context("Failed to read document version")?;

            return Err(match found {
                Some(found) => OnboardError::VersionConflict {
                    collection: document.collection.clone(),
                    id: document.id.clone(),
                    expected: document.version,
                    found: found as u64,
                },
                None => OnboardError::DocumentNotFound {
                    collection: document.collection.clone(),
                    id: document.id.clone(),
                },
            });
        }

        tx.commit().write_context("Failed to commit transaction")?;

        Ok(document.version + 1)
    }

    fn put_document(
        &mut self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<Document> {
        debug!("Storing document {collection}/{id}");
        let body = serde_json::to_string(&fields)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(UPSERT_DOCUMENT_SQL, params![collection, id, body, now])
            .db_context("Failed to store document")?;

        let version: i64 = tx
            .query_row(SELECT_VERSION_SQL, params![collection, id], |row| row.get(0))
            .db_context("Failed to read document version")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Document {
            collection: collection.to_string(),
            id: id.to_string(),
            version: version as u64,
            fields,
        })
    }
}
