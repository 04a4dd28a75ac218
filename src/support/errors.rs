use thiserror::Error;

use crate::domain::ProviderKind;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Service '{service}' ({service_kind}) is not available to a {provider_kind} provider")]
    InvalidServiceGroup {
        service: String,
        service_kind: ProviderKind,
        provider_kind: ProviderKind,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if resubmitted.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("Booking", 42);
        assert_eq!(err.to_string(), "Not found: Booking with id=42");
    }

    #[test]
    fn invalid_service_group_message() {
        let err = DomainError::InvalidServiceGroup {
            service: "Haircut".into(),
            service_kind: ProviderKind::Groomer,
            provider_kind: ProviderKind::Vet,
        };
        assert_eq!(
            err.to_string(),
            "Service 'Haircut' (groomer) is not available to a vet provider"
        );
    }

    #[test]
    fn only_storage_errors_are_transient() {
        assert!(DomainError::Storage("connection reset".into()).is_transient());
        assert!(!DomainError::Conflict("duplicate".into()).is_transient());
    }
}
