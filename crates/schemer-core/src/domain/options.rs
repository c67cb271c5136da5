//! Generation request and its resolved form.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{error::DomainError, strings::StringHelper};

/// Keys the rule fills in itself; callers cannot pass them as variables.
pub const RESERVED_KEYS: [&str; 3] = ["name", "path", "project"];

/// Request driving one scaffold run.
///
/// Built fluently and validated by the service before anything else runs:
///
/// ```
/// use schemer_core::domain::GenerationOptions;
///
/// let options = GenerationOptions::new("sub/widget")
///     .path("/custom")
///     .variable("prefix", "app");
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationOptions {
    pub project: Option<String>,
    pub name: String,
    pub path: Option<String>,
    pub variables: BTreeMap<String, String>,
}

impl GenerationOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Boundary checks run before any workspace lookups.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidOptions("name cannot be empty".into()));
        }

        if let Some(project) = &self.project {
            if project.trim().is_empty() {
                return Err(DomainError::InvalidOptions(
                    "project cannot be empty when given".into(),
                ));
            }
        }

        for key in self.variables.keys() {
            if !is_identifier(key) {
                return Err(DomainError::InvalidOptions(format!(
                    "variable '{key}' is not a valid identifier"
                )));
            }
            if RESERVED_KEYS.contains(&key.as_str()) || StringHelper::is_helper_name(key) {
                return Err(DomainError::InvalidOptions(format!(
                    "variable '{key}' shadows a built-in key"
                )));
            }
        }

        Ok(())
    }
}

/// Request after project, path and name resolution. No optional fields remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub project: String,
    pub name: String,
    pub path: String,
    pub variables: BTreeMap<String, String>,
}

pub(crate) fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
