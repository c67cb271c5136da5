//! Project tree adapters.

pub mod memory;

pub use memory::MemoryTree;
