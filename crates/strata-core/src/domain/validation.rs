use crate::domain::{entities::Blueprint, error::DomainError};

/// Centralized domain validation.
///
/// Services call this before any I/O; the per-entity rules live on the
/// entities themselves.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }
}
