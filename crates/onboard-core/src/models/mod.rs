//! Data models for documents and onboarding steps.
//!
//! This module contains the domain models the migration works with. Display
//! implementations live in [`crate::display`] to keep data structures separate
//! from presentation.
//!
//! Existing step records are read from stored documents as raw JSON objects
//! and only converted to [`Step`] for display; [`Step`] is the shape written
//! for newly inserted records.
//!
//! # Examples
//!
//! ```rust
//! use onboard_core::models::{ReplacementSet, StepStatus};
//! use jiff::Timestamp;
//!
//! let set = ReplacementSet::from_json(r#"{
//!     "discriminant": "payment",
//!     "steps": [
//!         { "name": "Purchase Subscription", "status": "done",
//!           "donelink": "View Invoice", "clickable": true }
//!     ]
//! }"#).unwrap();
//!
//! let steps = set.stamp(Timestamp::now());
//! assert_eq!(steps[0].id, "payment");
//! assert_eq!(steps[0].status, StepStatus::Done);
//! ```

pub mod document;
pub mod progress;
pub mod replacement;
pub mod status;
pub mod step;


pub use document::{Document, STEPS_FIELD};
pub use progress::StepProgress;
pub use replacement::{ReplacementSet, StepTemplate};
pub use status::StepStatus;
pub use step::Step;
