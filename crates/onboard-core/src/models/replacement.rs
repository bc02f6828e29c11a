//! Replacement step sets loaded from JSON files.

use std::path::Path;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Step, StepStatus};
use crate::error::{OnboardError, Result};

/// A step as written in a replacement file.
///
/// Templates carry no timestamp; every step of one run is stamped with the
/// same `updated_at` when the set is materialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepTemplate {
    /// Optional discriminant; must match the set's discriminant when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short human-readable title
    pub name: String,

    /// Longer explanation of the step
    #[serde(default)]
    pub description: String,

    /// Initial status of the step
    pub status: StepStatus,

    /// Label shown when the step is completed
    #[serde(default)]
    pub donelink: Option<String>,

    /// Whether the donelink renders as a hyperlink
    #[serde(default)]
    pub clickable: bool,
}

/// The discriminant plus the ordered steps that replace it on a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplacementSet {
    /// Value of `id` selecting the steps to replace
    pub discriminant: String,

    /// Replacement steps, in display order
    pub steps: Vec<StepTemplate>,
}

impl ReplacementSet {
    /// Reads and validates a replacement set from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| OnboardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parses and validates a replacement set from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: ReplacementSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Checks the set is usable as merge input.
    pub fn validate(&self) -> Result<()> {
        if self.discriminant.trim().is_empty() {
            return Err(OnboardError::invalid_input("discriminant").with_reason("must not be empty"));
        }
        if self.steps.is_empty() {
            return Err(
                OnboardError::invalid_input("steps").with_reason("at least one step is required")
            );
        }
        for (index, template) in self.steps.iter().enumerate() {
            if template.status == StepStatus::Other {
                return Err(OnboardError::invalid_input(format!("steps[{index}].status"))
                    .with_reason("must be one of todo, in_progress, done"));
            }
            if let Some(id) = &template.id {
                if id != &self.discriminant {
                    return Err(OnboardError::invalid_input(format!("steps[{index}].id"))
                        .with_reason(format!(
                            "'{id}' does not match discriminant '{}'",
                            self.discriminant
                        )));
                }
            }
        }
        Ok(())
    }

    /// Materializes the templates into steps stamped with `now`.
    pub fn stamp(&self, now: Timestamp) -> Vec<Step> {
        let updated_at = now.to_string();
        self.steps
            .iter()
            .map(|template| Step {
                id: self.discriminant.clone(),
                name: template.name.clone(),
                description: template.description.clone(),
                status: template.status,
                updated_at: updated_at.clone(),
                donelink: template.donelink.clone(),
                clickable: template.clickable,
            })
            .collect()
    }
}
