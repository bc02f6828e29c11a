//! Core library for the Onboard migration tool.
//!
//! Onboard replaces the onboarding steps of one workflow stage on a stored
//! company document. The crate provides:
//!
//! - [`merge`]: the pure step list merge
//! - [`store`]: the document store collaborator and its SQLite implementation
//! - [`migrator`]: read, merge and conditional write sequencing
//! - [`display`]: human-readable reports and listings
//!
//! # Quick Start
//!
//! ```rust
//! use onboard_core::{
//!     display::MigrationReport,
//!     models::ReplacementSet,
//!     params::{DocumentRef, MigrateSteps},
//!     MigratorBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let migrator = MigratorBuilder::new()
//!     .with_database_path(Some("documents.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = migrator
//!     .migrate(&MigrateSteps {
//!         document: DocumentRef::new("companies", "BE93DWq1pTotszXIhSOE"),
//!         replacements: ReplacementSet::from_file("payment-steps.json")?,
//!         dry_run: false,
//!     })
//!     .await?;
//! print!("{}", MigrationReport(&outcome));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod merge;
pub mod migrator;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use error::{OnboardError, Result};
pub use migrator::{MigrationOutcome, Migrator, MigratorBuilder, StepListing};
pub use models::{Document, ReplacementSet, Step, StepStatus};
pub use params::{DocumentRef, MigrateSteps, SetStepStatus};
pub use store::{DocumentStore, SqliteStore};
