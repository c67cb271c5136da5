//! Application layer for Schemer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for the host tree and templates
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rule logic itself. Path, naming and rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldPlan, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{ProjectTree, TemplateSource};

pub use error::ApplicationError;
