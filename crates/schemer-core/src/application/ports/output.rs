//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what a rule needs from its host.
//! The `schemer-adapters` crate provides implementations.

use crate::domain::{ChangeSet, FileSet};
use crate::error::SchemerResult;

/// Port for the host's virtual project tree.
///
/// Implemented by:
/// - `schemer_adapters::tree::MemoryTree` (in-memory tree, also used by the CLI snapshot)
///
/// ## Design Notes
///
/// - Paths are normalized absolute tree paths (`/src/app/a.ts`)
/// - Rules only read individual files and write through [`ProjectTree::apply`]
/// - `apply` is all-or-nothing: on error the tree must be unchanged
#[cfg_attr(test, mockall::automock)]
pub trait ProjectTree {
    /// Read a file as UTF-8 text. `Ok(None)` when the path does not exist.
    fn read(&self, path: &str) -> SchemerResult<Option<String>>;

    /// Check if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Create or replace every file in `changes` as one atomic step.
    fn apply(&mut self, changes: ChangeSet) -> SchemerResult<()>;
}

/// Port for template file sets.
///
/// Implemented by:
/// - `schemer_adapters::templates::InMemoryTemplates` (fixed file set, built-ins)
/// - `schemer_adapters::templates::FilesystemTemplates` (a directory on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Load the raw template files, paths relative to the template root.
    fn load(&self) -> SchemerResult<FileSet>;
}
