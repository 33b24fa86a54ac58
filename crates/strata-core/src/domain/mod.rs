// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure data and rules with no I/O. Filesystem access
//! is handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Blueprints are read-only input; reports are
//!   built once per run and never mutated afterwards
//!
pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use entities::{
    blueprint::{BackendSection, Blueprint, DEFAULT_MARKER, Section},
    common::RelativePath,
    report::{EmitOutcome, EmitReport, EmitStatus, FallbackReason, Location, ScaffoldReport},
};

pub use error::DomainError;
pub use validation::DomainValidator;
