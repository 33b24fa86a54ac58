pub mod blueprint;
pub mod common;
pub mod report;

pub use crate::domain::DomainError;
pub use blueprint::{BackendSection, Blueprint, Section};
pub use report::{EmitOutcome, EmitReport, EmitStatus, Location, ScaffoldReport};
