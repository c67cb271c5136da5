//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the one use case Schemer has: "generate files into a workspace".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldPlan, ScaffoldService};
