// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Schemer.
//!
//! This module contains the pure logic of a generation rule. Reading the
//! workspace file, loading templates and writing into a project tree all go
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or tree access
//! - **Total path logic**: `name` functions never fail
//! - **Value objects**: All domain types are Clone + PartialEq
//!
pub mod change_set;
pub mod error;
pub mod name;
pub mod options;
pub mod pipeline;
pub mod strings;
pub mod template;
pub mod workspace;

pub use change_set::{ChangeSet, MergeReport, MergeStrategy};
pub use error::{DomainError, ErrorCategory};
pub use name::{ParsedName, normalize, parse_name};
pub use options::{GenerationOptions, RESERVED_KEYS, ResolvedOptions};
pub use pipeline::{PipelineStep, TemplatePipeline};
pub use strings::StringHelper;
pub use template::{FileSet, TEMPLATE_SUFFIX, TemplateContext, TemplateFile};
pub use workspace::{ProjectConfig, ProjectType, WORKSPACE_CONFIG_PATH, WorkspaceConfig};
