//! Command-line argument definitions using clap.
//!
//! Argument structs stay in the CLI crate and convert into the core parameter
//! types, so `onboard-core` never depends on clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use onboard_core::{models::StepStatus, params::DEFAULT_COLLECTION};

/// Replace onboarding steps on a stored company document
///
/// Onboard reads one document, swaps out the onboarding steps of a single
/// workflow stage for those listed in a replacement file, and writes the
/// document back only if nobody changed it in the meantime.
#[derive(Parser)]
#[command(version, about, name = "onboard")]
pub struct Args {
    /// Path to the SQLite document store. Defaults to
    /// $XDG_DATA_HOME/onboard/documents.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Collection holding the documents
    #[arg(long, global = true, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Onboard CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Replace the steps of one stage with those from a replacement file
    #[command(alias = "m")]
    Migrate(MigrateArgs),
    /// Inspect or change onboarding steps
    #[command(alias = "s")]
    Steps {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Read or store whole documents
    #[command(alias = "d")]
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
}

/// Replace the steps of one stage
///
/// The replacement file is JSON with a `discriminant` and a non-empty `steps`
/// array. Every existing step whose `id` equals the discriminant is removed and
/// the new steps are placed first, followed by the remaining steps in their
/// original order.
#[derive(ClapArgs)]
pub struct MigrateArgs {
    #[arg(help = "Identifier of the document to migrate")]
    pub document_id: String,
    #[arg(short, long, help = "JSON file with the discriminant and replacement steps")]
    pub replacements: PathBuf,
    #[arg(long, help = "Print the result without writing the document")]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// List a document's steps with completion progress
    #[command(alias = "l")]
    List {
        #[arg(help = "Identifier of the document")]
        document_id: String,
    },
    /// Set the status of every step with the given ID
    #[command(alias = "st")]
    SetStatus(SetStatusArgs),
}

/// Set the status of every step with the given ID
#[derive(ClapArgs)]
pub struct SetStatusArgs {
    #[arg(help = "Identifier of the document")]
    pub document_id: String,
    #[arg(help = "Step ID (stage discriminant) to update")]
    pub step_id: String,
    #[arg(help = "New status for the steps (todo, in_progress, done)")]
    pub status: StepStatus,
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Print a document's fields as JSON
    Get {
        #[arg(help = "Identifier of the document")]
        document_id: String,
    },
    /// Create or replace a document from a JSON file
    Put {
        #[arg(help = "Identifier of the document")]
        document_id: String,
        #[arg(help = "JSON file containing the document fields")]
        file: PathBuf,
    },
}
