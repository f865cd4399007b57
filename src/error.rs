//! Custom error types for the dining budget tracker
//!
//! The pacing engine itself never fails; these errors live at the
//! boundaries: storage, configuration and the mutation intents.

use thiserror::Error;

/// The main error type for tracker operations
#[derive(Error, Debug)]
pub enum DiningError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and settings patches
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A spend larger than the remaining balance under the `block` policy
    #[error("Insufficient funds: cannot spend {needed}, only {available} remaining")]
    InsufficientFunds { needed: String, available: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DiningError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for meal presets
    pub fn preset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Preset",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for semester templates
    pub fn semester_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Semester",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DiningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DiningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type DiningResult<T> = Result<T, DiningError>;
