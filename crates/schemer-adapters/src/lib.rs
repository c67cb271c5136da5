//! Infrastructure adapters for Schemer.
//!
//! This crate implements the ports defined in `schemer-core::application::ports`.
//! It contains all I/O: reading template directories and snapshotting a
//! workspace from disk.

pub mod builtin_templates;
pub mod error;
pub mod templates;
pub mod tree;

// Re-export commonly used adapters
pub use error::AdapterError;
pub use templates::{FilesystemTemplates, InMemoryTemplates};
pub use tree::MemoryTree;
