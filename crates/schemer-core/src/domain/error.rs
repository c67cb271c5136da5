// ============================================================================
// domain/error.rs - RULE-LEVEL FAILURES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported by value through every layer)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid generation options: {0}")]
    InvalidOptions(String),

    #[error("Cannot derive an artifact name from '{raw}'")]
    InvalidName { raw: String },

    #[error("Template '{file}' cannot render '{placeholder}': {reason}")]
    TemplateRender {
        file: String,
        placeholder: String,
        reason: String,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Project '{project}' is not defined in the workspace")]
    UnresolvedProject {
        project: String,
        available: Vec<String>,
    },

    #[error("No project given and the workspace declares no default project")]
    NoDefaultProject { available: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOptions(msg) => vec![
                format!("Details: {msg}"),
                "Names must be non-empty; variable keys must be identifiers".into(),
                "Reserved keys: name, path, project and the helper names".into(),
            ],
            Self::InvalidName { raw } => vec![
                format!("'{raw}' does not end in a usable name"),
                "Pass the artifact name as the last segment, e.g. sub/widget".into(),
                "A trailing separator, '.' or '..' leaves no name".into(),
            ],
            Self::TemplateRender { placeholder, .. } => vec![
                format!("Provide a value for '{placeholder}' with --set KEY=VALUE"),
                "Helpers: classify, dasherize, camelize, underscore, decamelize, capitalize"
                    .into(),
            ],
            Self::UnresolvedProject { available, .. } | Self::NoDefaultProject { available } => {
                let mut out = vec!["Pass an existing project with --project".into()];
                if available.is_empty() {
                    out.push("The workspace declares no projects".into());
                } else {
                    out.push(format!("Known projects: {}", available.join(", ")));
                }
                out
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOptions(_) | Self::InvalidName { .. } | Self::TemplateRender { .. } => {
                ErrorCategory::Validation
            }
            Self::UnresolvedProject { .. } | Self::NoDefaultProject { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
