//! Error handling module for the hours estimator
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Selection failures are local validation errors: they are reported to the
//! caller of the offending operation and never retried.

use thiserror::Error;

/// Main error type for the hours estimator
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Category id is not a key of the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Task id does not belong to the given category
    #[error("Unknown task '{task}' in category '{category}'")]
    UnknownTask { category: String, task: String },

    /// A task was chosen before any category
    #[error("No category selected")]
    NoCategorySelected,

    /// Size name is not one of small, standard, large
    #[error("Invalid size class: {0}")]
    InvalidSizeClass(String),

    /// Estimate requested without both a category and a task
    #[error("Incomplete selection: choose a category and a task first")]
    IncompleteSelection,

    /// Catalog construction rejected (duplicate ids, bad numbers)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// IO errors (terminal, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

// Convenient error constructors
impl EstimatorError {
    /// Create an unknown category error
    pub fn unknown_category(id: impl Into<String>) -> Self {
        Self::UnknownCategory(id.into())
    }

    /// Create an unknown task error
    pub fn unknown_task(category: impl Into<String>, task: impl Into<String>) -> Self {
        Self::UnknownTask {
            category: category.into(),
            task: task.into(),
        }
    }

    /// Create a catalog validation error
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    /// True for the errors caused by a bad selection command
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_)
                | Self::UnknownTask { .. }
                | Self::NoCategorySelected
                | Self::InvalidSizeClass(_)
                | Self::IncompleteSelection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::unknown_category("industrial");
        assert_eq!(err.to_string(), "Unknown category: industrial");

        let err = EstimatorError::unknown_task("commercial", "kitchenRemodel");
        assert_eq!(
            err.to_string(),
            "Unknown task 'kitchenRemodel' in category 'commercial'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: EstimatorError = io_err.into();
        assert!(matches!(err, EstimatorError::Io(_)));
        assert!(!err.is_selection_error());
    }

    #[test]
    fn test_selection_errors_are_classified() {
        assert!(EstimatorError::NoCategorySelected.is_selection_error());
        assert!(EstimatorError::IncompleteSelection.is_selection_error());
        assert!(EstimatorError::InvalidSizeClass("huge".into()).is_selection_error());
        assert!(!EstimatorError::invalid_catalog("dup").is_selection_error());
    }
}
