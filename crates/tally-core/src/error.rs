//! Error types for the Tally application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Tally application.
///
/// All validation in the core is local and non-fatal: the worst case is
/// a rejected or ignored input. Variants carry enough context for the
/// shell to decide what (if anything) to surface to the user.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TallyError {
    /// A required form field was submitted empty
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Text input that does not parse as a number
    #[error("'{input}' is not a valid amount")]
    InvalidNumber { input: String },

    /// Attempted user expense greater than the bill total
    #[error("Expense {attempted} exceeds the bill total {bill}")]
    ExpenseExceedsBill { attempted: f64, bill: f64 },

    /// Split submission without a bill total or user expense
    #[error("Bill total and your expense are required to split")]
    IncompleteInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl TallyError {
    /// Creates an EmptyField error
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an InvalidNumber error
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an EmptyField error
    pub fn is_empty_field(&self) -> bool {
        matches!(self, Self::EmptyField { .. })
    }

    /// Check if this is an ExpenseExceedsBill error
    pub fn is_expense_exceeds_bill(&self) -> bool {
        matches!(self, Self::ExpenseExceedsBill { .. })
    }

    /// Check if this is an IncompleteInput error
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, Self::IncompleteInput)
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for TallyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A type alias for `Result<T, TallyError>`.
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_display() {
        let err = TallyError::empty_field("name");
        assert_eq!(err.to_string(), "Field 'name' must not be empty");
        assert!(err.is_empty_field());
    }

    #[test]
    fn test_predicates_do_not_overlap() {
        let err = TallyError::ExpenseExceedsBill {
            attempted: 60.0,
            bill: 50.0,
        };
        assert!(err.is_expense_exceeds_bill());
        assert!(!err.is_empty_field());
        assert!(!err.is_incomplete_input());
    }
}
