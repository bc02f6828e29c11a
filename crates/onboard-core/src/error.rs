//! Error types for the onboarding migration library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all migration operations.
#[derive(Error, Debug)]
pub enum OnboardError {
    /// The target document does not exist in the collection
    #[error("Document '{id}' not found in collection '{collection}'")]
    DocumentNotFound { collection: String, id: String },
    /// A stored step record lacks the fields needed to classify it
    #[error("Malformed step record{}: {reason}", MalformedIndex(*.index))]
    MalformedRecord { index: Option<usize>, reason: String },
    /// The update call against the document store failed
    #[error("Write failed: {message}")]
    Write {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Another writer changed the document between read and write
    #[error(
        "Document '{id}' in collection '{collection}' changed concurrently \
         (expected version {expected}, found {found})"
    )]
    VersionConflict {
        collection: String,
        id: String,
        expected: u64,
        found: u64,
    },
    /// No step carries the requested discriminant
    #[error("No onboarding step with ID '{id}'")]
    StepNotFound { id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Formats the optional record index of a malformed record error.
struct MalformedIndex(Option<usize>);

impl fmt::Display for MalformedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, " at index {index}"),
            None => Ok(()),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OnboardError {
        OnboardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OnboardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed record error for the record at `index`.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        OnboardError::MalformedRecord {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Maps a failed tokio blocking task into a configuration error.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        OnboardError::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Extension trait for Results of the document update path.
pub trait WriteResultExt<T> {
    /// Map database errors raised while writing into [`OnboardError::Write`].
    fn write_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| OnboardError::Database {
            message: message.to_string(),
            source,
        })
    }
}

impl<T> WriteResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn write_context(self, message: &str) -> Result<T> {
        self.map_err(|source| OnboardError::Write {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for migration operations
pub type Result<T> = std::result::Result<T, OnboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_includes_index() {
        let err = OnboardError::malformed(2, "missing 'id' field");
        assert_eq!(
            err.to_string(),
            "Malformed step record at index 2: missing 'id' field"
        );

        let err = OnboardError::MalformedRecord {
            index: None,
            reason: "'onboarding_steps' is not an array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed step record: 'onboarding_steps' is not an array"
        );
    }

    #[test]
    fn test_write_context_maps_to_write_error() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.write_context("Failed to update document").unwrap_err();
        assert!(matches!(err, OnboardError::Write { .. }));
        assert_eq!(err.to_string(), "Write failed: Failed to update document");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = OnboardError::invalid_input("steps").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'steps': must not be empty"
        );
    }
}
