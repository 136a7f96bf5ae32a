//! Error types for the budget tracker
//!
//! A single error enum covers the whole library. The interaction layer decides
//! how each variant is rendered; nothing in here prints.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A create was rejected because the business key is already taken
    #[error("{entity_type} category already exists: {category}")]
    DuplicateCategory {
        entity_type: &'static str,
        category: String,
    },

    /// A lookup by business key found nothing
    #[error("No {entity_type} found for '{key}'")]
    NoMatch {
        entity_type: &'static str,
        key: String,
    },

    /// Underlying persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input was closed before an answer was given
    #[error("End of input")]
    EndOfInput,
}

impl TrackerError {
    /// Create a duplicate error for an expense category
    pub fn duplicate_expense(category: impl Into<String>) -> Self {
        Self::DuplicateCategory {
            entity_type: "Expense",
            category: category.into(),
        }
    }

    /// Create a duplicate error for an income category
    pub fn duplicate_income(category: impl Into<String>) -> Self {
        Self::DuplicateCategory {
            entity_type: "Income",
            category: category.into(),
        }
    }

    /// Create a "no match" error for a key of the given entity kind
    pub fn no_match(entity_type: &'static str, key: impl Into<String>) -> Self {
        Self::NoMatch {
            entity_type,
            key: key.into(),
        }
    }

    /// Check if this is a duplicate-category rejection
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateCategory { .. })
    }

    /// Check if this is a "no match" error
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
