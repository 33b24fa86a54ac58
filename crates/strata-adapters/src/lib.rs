//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_blueprint;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_blueprint::builtin_blueprint;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
