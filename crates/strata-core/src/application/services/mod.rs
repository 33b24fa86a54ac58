//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! phases of a run: emitting declared directories and locating the native
//! package directory.

pub mod emit_service;
pub mod locate_service;
pub mod scaffold_service;

pub use emit_service::EmitService;
pub use locate_service::LocateService;
pub use scaffold_service::{RunMode, ScaffoldService};
