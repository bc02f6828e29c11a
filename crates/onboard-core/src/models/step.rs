//! Step model definition and related functionality.

use serde::{Deserialize, Deserializer, Serialize};

use super::StepStatus;

/// Represents one onboarding checklist entry stored on a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Discriminant grouping the step into a workflow stage
    pub id: String,

    /// Short human-readable title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Longer explanation of the step
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Current status of the step
    pub status: StepStatus,

    /// ISO-8601 timestamp of the last change
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// Label shown when the step is completed and linked to evidence
    #[serde(default)]
    pub donelink: Option<String>,

    /// Whether the donelink renders as a hyperlink rather than a plain tag
    #[serde(default, deserialize_with = "null_as_default")]
    pub clickable: bool,
}

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Step {
    /// Compares two steps ignoring `updated_at`.
    ///
    /// Re-running a migration regenerates timestamps, so structural equality
    /// is the meaningful comparison between runs.
    pub fn same_content(&self, other: &Step) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.status == other.status
            && self.donelink == other.donelink
            && self.clickable == other.clickable
    }
}
