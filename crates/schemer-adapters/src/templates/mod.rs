//! Template source adapters.

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemTemplates;
pub use memory::InMemoryTemplates;
