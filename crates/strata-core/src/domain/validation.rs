use crate::domain::{
    entities::ComponentLayout,
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &ComponentLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
