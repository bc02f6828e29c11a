//! Tests for the migrator module.

use jiff::Timestamp;
use serde_json::{json, Value};
use tempfile::TempDir;

use super::*;
use crate::{
    models::{ReplacementSet, StepStatus, STEPS_FIELD},
    store::DocumentStore,
};

const COMPANY: &str = "BE93DWq1pTotszXIhSOE";

/// Helper function to create a test migrator
async fn create_test_migrator() -> (TempDir, Migrator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let migrator = MigratorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create migrator");
    (temp_dir, migrator)
}

fn company() -> DocumentRef {
    DocumentRef::new("companies", COMPANY)
}

fn company_body() -> Value {
    json!({
        "name": "Synthetic Co",
        "user_ids": ["u1", "u2"],
        STEPS_FIELD: [
            { "id": "payment", "name": "Old payment", "description": "", "status": "todo",
              "updated_at": "2025-01-01T00:00:00" },
            { "id": "billing", "name": "Billing contact", "description": "Add a contact",
              "status": "done", "updated_at": "2025-01-02T00:00:00",
              "donelink": "finance@example.com", "clickable": false },
            { "id": "payment", "name": "Older payment", "description": "", "status": "done",
              "updated_at": "2025-01-03T00:00:00" }
        ]
    })
}

fn replacement_set() -> ReplacementSet {
    ReplacementSet::from_json(
        r#"{
            "discriminant": "payment",
            "steps": [
                { "name": "Purchase Subscription",
                  "description": "Synthetic Teams accepts Credit Card, ACH and Check payments.",
                  "status": "done", "donelink": "View Invoice", "clickable": true },
                { "name": "Invite Team Members",
                  "description": "Add your team members to the platform",
                  "status": "todo" }
            ]
        }"#,
    )
    .expect("valid replacement set")
}

fn migrate_params(dry_run: bool) -> MigrateSteps {
    MigrateSteps {
        document: company(),
        replacements: replacement_set(),
        dry_run,
    }
}

fn now() -> Timestamp {
    "2025-03-04T13:14:50Z".parse().unwrap()
}

#[tokio::test]
async fn test_migrate_replaces_payment_steps() {
    let (_temp_dir, migrator) = create_test_migrator().await;
    migrator
        .put_document(&company(), company_body())
        .await
        .expect("Failed to seed document");

    let outcome = migrator
        .migrate(&migrate_params(false))
        .await
        .expect("Failed to migrate");

    assert_eq!(outcome.inserted.len(), 2);
    assert_eq!(outcome.removed, 2);
    assert_eq!(outcome.kept, 1);
    assert_eq!(outcome.version, Some(2));
    assert!(outcome.written());

    let listing = migrator.list_steps(&company()).await.expect("Failed to list");
    let names: Vec<_> = listing.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Purchase Subscription", "Invite Team Members", "Billing contact"]
    );
    assert_eq!(listing.progress.completed, 2);
    assert_eq!(listing.progress.total, 3);
}

#[tokio::test]
async fn test_migrate_keeps_other_document_fields() {
    let (_temp_dir, migrator) = create_test_migrator().await;
    migrator.put_document(&company(), company_body()).await.unwrap();

    migrator.migrate(&migrate_params(false)).await.unwrap();

    let document = migrator.get_document(&company()).await.unwrap();
    assert_eq!(document.fields["name"], "Synthetic Co");
    assert_eq!(document.fields["user_ids"], json!(["u1", "u2"]));
    assert_eq!(document.version, 2);
}

#[tokio::test]
async fn test_migrate_dry_run_leaves_document_unchanged() {
    let (_temp_dir, migrator) = create_test_migrator().await;
    let seeded = migrator.put_document(&company(), company_body()).await.unwrap();

    let outcome = migrator.migrate(&migrate_params(true)).await.unwrap();

    assert_eq!(outcome.version, None);
    assert_eq!(outcome.removed, 2);
    let document = migrator.get_document(&company()).await.unwrap();
    assert_eq!(document, seeded);
}

#[tokio::test]
async fn test_migrate_missing_document() {
    let (_temp_dir, migrator) = create_test_migrator().await;

    let err = migrator.migrate(&migrate_params(false)).await.unwrap_err();

    assert!(matches!(err, OnboardError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn test_migrate_malformed_record_aborts_before_write() {
    let (_temp_dir, migrator) = create_test_migrator().await;
    let body = json!({
        STEPS_FIELD: [
            { "id": "billing", "name": "Billing", "status": "todo" },
            { "name": "No discriminant", "status": "todo" }
        ]
    });
    let seeded = migrator.put_document(&company(), body).await.unwrap();

    let err = migrator.migrate(&migrate_params(false)).await.unwrap_err();

    assert!(matches!(err, OnboardError::MalformedRecord { index: Some(1), .. }));
    let document = migrator.get_document(&company()).await.unwrap();
    assert_eq!(document, seeded);
}

#[tokio::test]
async fn test_migrate_document_without_steps_field() {
    let (_temp_dir, migrator) = create_test_migrator().await;
    migrator
        .put_document(&company(), json!({ "name": "Fresh Co" }))
        .await
        .unwrap();

    let outcome = migrator.migrate(&migrate_params(false)).await.unwrap();

    assert_eq!(outcome.removed, 0);
    assert_eq!(outcome.kept, 0);
    let listing = migrator.list_steps(&company()).await.unwrap();
    assert_eq!(listing.steps.len(), 2);
}

#[test]
fn test_migrate_detects_concurrent_writer() {
    /// Store that lets another writer slip in between read and write.
    struct RacingStore(SqliteStore);

    impl DocumentStore for RacingStore {
        fn get_document(&self, collection: &str, id: &str) -> crate::Result<Document> {
            self.0.get_document(collection, id)
        }

        fn update_document(&mut self, document: &Document) -> crate::Result<u64> {
            let mut other = self.0.get_document(&document.collection, &document.id)?;
            other.fields.insert("touched".to_string(), json!(true));
            self.0.update_document(&other)?;
            self.0.update_document(document)
        }

        fn put_document(
            &mut self,
            collection: &str,
            id: &str,
            fields: serde_json::Map<String, Value>,
        ) -> crate::Result<Document> {
            self.0.put_document(collection, id, fields)
        }
    }

    let mut store = RacingStore(SqliteStore::in_memory().unwrap());
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    let err = ops::migrate_steps(&mut store, &migrate_params(false), now()).unwrap_err();

    assert!(matches!(
        err,
        OnboardError::VersionConflict {
            expected: 1,
            found: 2,
            ..
        }
    ));
    let document = ops::get_document(&store, &company()).unwrap();
    assert_eq!(document.fields[STEPS_FIELD].as_array().unwrap().len(), 3);
}

#[test]
fn test_migrate_stamps_inserted_steps_with_run_time() {
    let mut store = SqliteStore::in_memory().unwrap();
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    let outcome = ops::migrate_steps(&mut store, &migrate_params(false), now()).unwrap();

    assert!(outcome
        .inserted
        .iter()
        .all(|s| s.updated_at == "2025-03-04T13:14:50Z"));
    let listing = ops::list_steps(&store, &company()).unwrap();
    assert_eq!(listing.steps[2].updated_at, "2025-01-02T00:00:00");
}

#[test]
fn test_migrate_twice_is_structurally_stable() {
    let mut store = SqliteStore::in_memory().unwrap();
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    ops::migrate_steps(&mut store, &migrate_params(false), now()).unwrap();
    let first = ops::list_steps(&store, &company()).unwrap();
    let later: Timestamp = "2025-04-01T09:00:00Z".parse().unwrap();
    ops::migrate_steps(&mut store, &migrate_params(false), later).unwrap();
    let second = ops::list_steps(&store, &company()).unwrap();

    assert_eq!(first.steps.len(), second.steps.len());
    assert!(first
        .steps
        .iter()
        .zip(&second.steps)
        .all(|(a, b)| a.same_content(b)));
}

#[test]
fn test_set_step_status_updates_all_matching_steps() {
    let mut store = SqliteStore::in_memory().unwrap();
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    let changed = ops::set_step_status(
        &mut store,
        &SetStepStatus {
            document: company(),
            step_id: "payment".to_string(),
            status: StepStatus::InProgress,
        },
        now(),
    )
    .unwrap();

    assert_eq!(changed, 2);
    let listing = ops::list_steps(&store, &company()).unwrap();
    assert_eq!(listing.steps[0].status, StepStatus::InProgress);
    assert_eq!(listing.steps[0].updated_at, "2025-03-04T13:14:50Z");
    assert_eq!(listing.steps[1].status, StepStatus::Done);
    assert_eq!(listing.steps[1].updated_at, "2025-01-02T00:00:00");
    assert_eq!(listing.steps[2].status, StepStatus::InProgress);
}

#[test]
fn test_set_step_status_unknown_step() {
    let mut store = SqliteStore::in_memory().unwrap();
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    let err = ops::set_step_status(
        &mut store,
        &SetStepStatus {
            document: company(),
            step_id: "security".to_string(),
            status: StepStatus::Done,
        },
        now(),
    )
    .unwrap_err();

    assert!(matches!(err, OnboardError::StepNotFound { ref id } if id == "security"));
    assert_eq!(ops::get_document(&store, &company()).unwrap().version, 1);
}

#[test]
fn test_list_steps_tolerates_unknown_status() {
    let mut store = SqliteStore::in_memory().unwrap();
    let body = json!({
        STEPS_FIELD: [
            { "id": "legal", "name": "Sign DPA", "status": "waiting_on_legal" }
        ]
    });
    ops::put_document(&mut store, &company(), body).unwrap();

    let listing = ops::list_steps(&store, &company()).unwrap();

    assert_eq!(listing.steps[0].status, StepStatus::Other);
    assert_eq!(listing.progress.completed, 0);
}

#[test]
fn test_set_step_status_rejects_placeholder_status() {
    let mut store = SqliteStore::in_memory().unwrap();
    ops::put_document(&mut store, &company(), company_body()).unwrap();

    let err = ops::set_step_status(
        &mut store,
        &SetStepStatus {
            document: company(),
            step_id: "billing".to_string(),
            status: StepStatus::Other,
        },
        now(),
    )
    .unwrap_err();

    assert!(matches!(err, OnboardError::InvalidInput { ref field, .. } if field == "status"));
    let document = ops::get_document(&store, &company()).unwrap();
    assert_eq!(document.version, 1);
    assert_eq!(document.fields[STEPS_FIELD][1]["status"], "done");
}

#[test]
fn test_list_steps_accepts_null_text_fields() {
    let mut store = SqliteStore::in_memory().unwrap();
    let body = json!({
        STEPS_FIELD: [
            { "id": "billing", "name": null, "description": null, "status": "todo",
              "updated_at": null, "donelink": null, "clickable": false }
        ]
    });
    ops::put_document(&mut store, &company(), body).unwrap();

    let listing = ops::list_steps(&store, &company()).unwrap();

    assert_eq!(listing.steps.len(), 1);
    assert_eq!(listing.steps[0].name, "");
    assert_eq!(listing.steps[0].description, "");
    assert_eq!(listing.steps[0].updated_at, "");
}

#[test]
fn test_put_document_rejects_non_object() {
    let mut store = SqliteStore::in_memory().unwrap();

    let err = ops::put_document(&mut store, &company(), json!([1, 2, 3])).unwrap_err();

    assert!(matches!(err, OnboardError::InvalidInput { ref field, .. } if field == "document"));
}
