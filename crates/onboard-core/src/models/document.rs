//! Stored document representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the onboarding step list on a company document.
pub const STEPS_FIELD: &str = "onboarding_steps";

/// A document read from a [`crate::store::DocumentStore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Collection the document lives in
    pub collection: String,

    /// Document identifier, unique within the collection
    pub id: String,

    /// Store-maintained revision used for conditional writes
    pub version: u64,

    /// Field name to value mapping
    pub fields: Map<String, Value>,
}
