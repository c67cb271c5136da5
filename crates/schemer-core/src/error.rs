//! Unified error handling for Schemer Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Schemer Core operations.
///
/// This enum wraps all possible errors that can occur when running a rule,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemerError {
    /// Errors from the domain layer (rule logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SchemerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SchemerResult<T> = Result<T, SchemerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: SchemerError = DomainError::UnresolvedProject {
            project: "missing".into(),
            available: vec![],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: SchemerError = ApplicationError::ConfigParse {
            path: "/angular.json".into(),
            reason: "eof".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn display_is_transparent() {
        let err: SchemerError = ApplicationError::ConfigNotFound {
            path: "/angular.json".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Could not find workspace configuration at /angular.json"
        );
    }
}
