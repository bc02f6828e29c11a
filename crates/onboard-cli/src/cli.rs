//! Command handlers for the Onboard CLI.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use onboard_core::{
    display::{MigrationReport, OperationStatus},
    models::ReplacementSet,
    params::{DocumentRef, MigrateSteps, SetStepStatus},
    Migrator,
};
use serde_json::Value;

use crate::{
    args::{DocCommands, MigrateArgs, SetStatusArgs, StepCommands},
    renderer::TerminalRenderer,
};

/// CLI handler that owns the migrator and the renderer.
pub struct Cli {
    migrator: Migrator,
    renderer: TerminalRenderer,
    collection: String,
}

impl Cli {
    pub fn new(migrator: Migrator, renderer: TerminalRenderer, collection: String) -> Self {
        Self {
            migrator,
            renderer,
            collection,
        }
    }

    fn document(&self, id: String) -> DocumentRef {
        DocumentRef::new(self.collection.clone(), id)
    }

    pub async fn migrate(&self, args: MigrateArgs) -> Result<()> {
        let replacements = ReplacementSet::from_file(&args.replacements).with_context(|| {
            format!(
                "Failed to load replacement steps from {}",
                args.replacements.display()
            )
        })?;

        let params = MigrateSteps {
            document: self.document(args.document_id),
            replacements,
            dry_run: args.dry_run,
        };
        info!(
            "Migrating '{}' steps on {}/{}",
            params.replacements.discriminant, params.document.collection, params.document.id
        );

        let outcome = self
            .migrator
            .migrate(&params)
            .await
            .context("Failed to migrate onboarding steps")?;

        print!("{}", MigrationReport(&outcome));
        Ok(())
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::List { document_id } => {
                let listing = self
                    .migrator
                    .list_steps(&self.document(document_id))
                    .await
                    .context("Failed to list onboarding steps")?;
                self.renderer.render(&listing.to_string())
            }
            StepCommands::SetStatus(args) => self.set_status(args).await,
        }
    }

    async fn set_status(&self, args: SetStatusArgs) -> Result<()> {
        let params = SetStepStatus {
            document: self.document(args.document_id),
            step_id: args.step_id,
            status: args.status,
        };

        let changed = self
            .migrator
            .set_step_status(&params)
            .await
            .context("Failed to update step status")?;

        let status = OperationStatus::success(format!(
            "Set {changed} '{}' step(s) to {}",
            params.step_id, params.status
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_doc_command(&self, command: DocCommands) -> Result<()> {
        match command {
            DocCommands::Get { document_id } => {
                let document = self
                    .migrator
                    .get_document(&self.document(document_id))
                    .await
                    .context("Failed to read document")?;
                println!("{}", serde_json::to_string_pretty(&document.fields)?);
                Ok(())
            }
            DocCommands::Put { document_id, file } => {
                let body = read_json(&file)?;
                let document = self
                    .migrator
                    .put_document(&self.document(document_id), body)
                    .await
                    .context("Failed to store document")?;
                let status = OperationStatus::success(format!(
                    "Stored document {}/{} (version {})",
                    document.collection, document.id, document.version
                ));
                self.renderer.render(&status.to_string())
            }
        }
    }
}

/// Reads a JSON value from a file.
fn read_json(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {}", path.display()))
}
