//! Template source reading a directory.
//!
//! # Directory layout expected
//!
//! ```text
//! files/
//! ├── __name@dasherize__.component.ts.template
//! ├── __name@dasherize__.component.html.template
//! └── testing/
//!     └── __name@dasherize__.harness.ts.template
//! ```
//!
//! Every regular file becomes one template, keyed by its `/`-separated path
//! relative to the root. Files are returned sorted by path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use schemer_core::{
    application::ports::TemplateSource,
    domain::{FileSet, TemplateFile},
    error::SchemerResult,
};

use crate::error::AdapterError;

/// Conventional template directory name next to a rule.
pub const DEFAULT_DIR: &str = "files";

/// Loads templates from a directory on every call.
#[derive(Debug, Clone)]
pub struct FilesystemTemplates {
    root: PathBuf,
}

impl FilesystemTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_all(&self) -> Result<FileSet, AdapterError> {
        if !self.root.is_dir() {
            return Err(AdapterError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut files = FileSet::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| AdapterError::Walk {
                root: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let content = fs::read_to_string(entry.path())
                .map_err(|e| AdapterError::io(entry.path(), "read template", e))?;
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            debug!(path = %relative, "Loaded template file");
            files.push(TemplateFile::new(relative, content));
        }
        Ok(files)
    }
}

impl TemplateSource for FilesystemTemplates {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn load(&self) -> SchemerResult<FileSet> {
        self.read_all().map_err(AdapterError::into_template_load)
    }
}
