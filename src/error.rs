//! Custom error types for envelope-server
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for envelope operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvelopeError {
    /// The user has no envelope set in the store
    #[error("No envelopes found for {user}")]
    UserNotFound { user: String },

    /// The user exists but has no envelope with this category
    #[error("Category {category} not found for {user}")]
    CategoryNotFound { user: String, category: String },

    /// A budget amount failed validation
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// A spending amount failed validation or exceeds the budget
    #[error("Invalid spending: {0}")]
    InvalidSpending(String),

    /// A transfer named a missing, empty or repeated category
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// A transfer amount failed validation or exceeds the source budget
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EnvelopeError {
    /// Create a "not found" error for a user
    pub fn user_not_found(user: impl Into<String>) -> Self {
        Self::UserNotFound { user: user.into() }
    }

    /// Create a "not found" error for a category of a user
    pub fn category_not_found(user: impl Into<String>, category: impl Into<String>) -> Self {
        Self::CategoryNotFound {
            user: user.into(),
            category: category.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::CategoryNotFound { .. }
        )
    }

    /// Check if this is a validation error caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget(_)
                | Self::InvalidSpending(_)
                | Self::InvalidCategory(_)
                | Self::InvalidAmount(_)
                | Self::Json(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EnvelopeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for envelope operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
