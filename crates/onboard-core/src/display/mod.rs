//! Display formatting for migration results and step listings.
//!
//! Output is built from `Display` implementations so the CLI only decides
//! where text goes, not what it says.
//!
//! - [`report`]: the line-oriented summary printed after a migration
//! - [`listing`]: markdown listing of a document's steps with progress
//! - [`status`]: one-line confirmation messages
//! - [`datetime`]: local time formatting for stored timestamps
//!
//! # Examples
//!
//! ```rust
//! use onboard_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Stored document companies/acme".to_string());
//! assert_eq!(status.to_string(), "Success: Stored document companies/acme\n");
//! ```

pub mod datetime;
pub mod listing;
pub mod report;
pub mod status;

pub use datetime::StepTime;
pub use report::{DoneLink, MigrationReport, StepLine};
pub use status::OperationStatus;
