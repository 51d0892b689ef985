//! Custom error types for Fundsheet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Fundsheet operations
#[derive(Error, Debug)]
pub enum FundsheetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An entity with the same identifier is already stored
    #[error("{entity_type} id conflict: {identifier}")]
    Conflict {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard hand-off errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl FundsheetError {
    /// Create a "not found" error for expense items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for saved records
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Create a conflict error for a saved record id
    pub fn record_conflict(identifier: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an id conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FundsheetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FundsheetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for FundsheetError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Fundsheet operations
pub type FundsheetResult<T> = Result<T, FundsheetError>;
