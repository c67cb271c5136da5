//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule logic.
//! Rule logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while a rule talks to its ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The workspace file is not in the tree.
    #[error("Could not find workspace configuration at {path}")]
    ConfigNotFound { path: String },

    /// The workspace file is not valid JSON of the expected shape.
    #[error("Invalid workspace configuration at {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    /// The template source could not produce its files.
    #[error("Failed to load templates: {reason}")]
    TemplateLoad { reason: String },

    /// Produced paths already exist and the merge strategy refuses them.
    #[error("Refusing to overwrite {} existing file(s): {}", paths.len(), paths.join(", "))]
    MergeConflict { paths: Vec<String> },

    /// The project tree rejected an operation.
    #[error("Project tree error at {path}: {reason}")]
    TreeError { path: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("Expected a workspace file at {path}"),
                "Run the command from the workspace root or pass --workspace".into(),
            ],
            Self::ConfigParse { reason, .. } => vec![
                format!("Parser reported: {reason}"),
                "Each project needs \"projectType\" and \"sourceRoot\"".into(),
            ],
            Self::TemplateLoad { .. } => vec![
                "Check that the templates directory exists and is readable".into(),
                "Template files must be UTF-8 text".into(),
            ],
            Self::MergeConflict { .. } => vec![
                "Use --on-conflict overwrite to replace existing files".into(),
                "Or choose a different name or --path".into(),
            ],
            Self::TreeError { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::MergeConflict { .. } => ErrorCategory::Validation,
            Self::TemplateLoad { .. } | Self::TreeError { .. } => ErrorCategory::Internal,
        }
    }
}
