//! I/O failures inside adapters.
//!
//! Adapters raise [`AdapterError`] internally and convert it at the port
//! boundary into the application error that fits the port.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use schemer_core::{application::ApplicationError, error::SchemerError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}

impl AdapterError {
    pub(crate) fn io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            return Self::NotUtf8 {
                path: path.to_path_buf(),
            };
        }
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    /// Path the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotADirectory { path } | Self::Io { path, .. } | Self::NotUtf8 { path } => {
                path.as_path()
            }
            Self::Walk { root, source } => source.path().unwrap_or(root.as_path()),
        }
    }

    /// Failure while producing template files.
    pub fn into_template_load(self) -> SchemerError {
        ApplicationError::TemplateLoad {
            reason: self.to_string(),
        }
        .into()
    }

    /// Failure while reading the host tree.
    pub fn into_tree_error(self) -> SchemerError {
        ApplicationError::TreeError {
            path: self.path().display().to_string(),
            reason: self.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_data_is_reported_as_not_utf8() {
        let err = AdapterError::io(
            Path::new("logo.png"),
            "read",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(err, AdapterError::NotUtf8 { .. }));
    }

    #[test]
    fn tree_error_keeps_path() {
        let err = AdapterError::NotADirectory {
            path: PathBuf::from("/nope"),
        }
        .into_tree_error();
        assert_eq!(
            err,
            SchemerError::Application(ApplicationError::TreeError {
                path: "/nope".into(),
                reason: "/nope is not a directory".into(),
            })
        );
    }
}
