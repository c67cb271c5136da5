//! Schemer Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Schemer
//! generation rule, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           schemer-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │    Resolve, render, merge into tree     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (ProjectTree, TemplateSource)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     schemer-adapters (Infrastructure)   │
//! │  (MemoryTree, FilesystemTemplates, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (parse_name, TemplatePipeline, ...)    │
//! │         No I/O, no tree access          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemer_core::{
//!     application::ScaffoldService,
//!     domain::GenerationOptions,
//! };
//!
//! // 1. Describe the request
//! let options = GenerationOptions::new("admin/user-card").project("demo");
//!
//! // 2. Run the rule against a host tree (with injected adapters)
//! let service = ScaffoldService::new(Box::new(templates));
//! let report = service.scaffold(&mut tree, options)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldPlan, ScaffoldService,
        ports::{ProjectTree, TemplateSource},
    };
    pub use crate::domain::{
        ChangeSet, FileSet, GenerationOptions, MergeReport, MergeStrategy, ParsedName,
        ResolvedOptions, StringHelper, TemplateContext, TemplateFile, TemplatePipeline,
        WorkspaceConfig, parse_name,
    };
    pub use crate::error::{ErrorCategory, SchemerError, SchemerResult};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
