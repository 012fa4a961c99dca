//! Custom error types for budget-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::item::ItemValidationError;

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// An item was rejected before it reached the ledger
    #[error("{0}")]
    Validation(#[from] ItemValidationError),

    /// Positional delete outside the current item list
    #[error("No item at index {index} (ledger holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Report requested without a positive amount received
    #[error("Please enter the amount received")]
    MissingAmount,

    /// Report requested with no items recorded
    #[error("Please add at least one item")]
    EmptyLedger,

    /// Malformed interactive or command-line input
    #[error("{0}")]
    Command(String),
}

impl BudgetError {
    /// Create a "not found" error for items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
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

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::item_not_found("itm-1234abcd");
        assert_eq!(err.to_string(), "Item not found: itm-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            BudgetError::MissingAmount.to_string(),
            "Please enter the amount received"
        );
        assert_eq!(
            BudgetError::EmptyLedger.to_string(),
            "Please add at least one item"
        );
        let err: BudgetError = ItemValidationError::EmptyName.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter an item name");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = BudgetError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "No item at index 5 (ledger holds 2 items)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
