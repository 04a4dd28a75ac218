//! Catalog domain entities: services and provider assignments

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, ProviderKind};

/// Kind-specific service payload. The variant fixes the service kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ServiceDetails {
    #[serde(rename = "vet")]
    Veterinary {
        animal_type: String,
        emergency_available: bool,
    },
    #[serde(rename = "groomer")]
    Grooming {
        tools_required: String,
        coat_type: String,
    },
    #[serde(rename = "sitter")]
    Sitting {
        max_pets: i32,
        overnight_available: bool,
    },
}

impl ServiceDetails {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Veterinary { .. } => ProviderKind::Vet,
            Self::Grooming { .. } => ProviderKind::Groomer,
            Self::Sitting { .. } => ProviderKind::Sitter,
        }
    }
}

/// A catalog service offered under one provider kind
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    /// Base price in the smallest currency unit
    pub base_price_cents: i64,
    pub duration_min: i32,
    pub details: ServiceDetails,
}

impl Service {
    pub fn kind(&self) -> ProviderKind {
        self.details.kind()
    }
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub base_price_cents: i64,
    pub duration_min: i32,
    pub details: ServiceDetails,
}

impl NewService {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("Service name is required".into()));
        }
        if self.base_price_cents < 0 {
            return Err(DomainError::Validation(
                "Base price must be non-negative".into(),
            ));
        }
        if self.duration_min <= 0 {
            return Err(DomainError::Validation("Duration must be positive".into()));
        }
        if let ServiceDetails::Sitting { max_pets, .. } = self.details {
            if max_pets <= 0 {
                return Err(DomainError::Validation("max_pets must be positive".into()));
            }
        }
        Ok(())
    }
}

/// Assignment of a service to a provider with provider-specific terms.
///
/// Created only by the catalog synchronizer; providers may afterwards edit
/// price, duration and notes of their own rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderService {
    pub id: i32,
    pub provider_id: i32,
    pub service_id: i32,
    pub custom_price_cents: i64,
    pub custom_duration: i32,
    pub extra_info: Option<String>,
}

impl ProviderService {
    pub fn apply(&mut self, patch: ProviderServicePatch) -> DomainResult<()> {
        if patch.is_empty() {
            return Err(DomainError::Validation("Nothing to update".into()));
        }
        if let Some(price) = patch.custom_price_cents {
            if price < 0 {
                return Err(DomainError::Validation(
                    "Custom price must be non-negative".into(),
                ));
            }
            self.custom_price_cents = price;
        }
        if let Some(duration) = patch.custom_duration {
            if duration <= 0 {
                return Err(DomainError::Validation(
                    "Custom duration must be positive".into(),
                ));
            }
            self.custom_duration = duration;
        }
        if let Some(info) = patch.extra_info {
            self.extra_info = Some(info);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewProviderService {
    pub provider_id: i32,
    pub service_id: i32,
    pub custom_price_cents: i64,
    pub custom_duration: i32,
}

impl NewProviderService {
    /// Seed the assignment with the service's base terms.
    pub fn seeded_from(provider_id: i32, service: &Service) -> Self {
        Self {
            provider_id,
            service_id: service.id,
            custom_price_cents: service.base_price_cents,
            custom_duration: service.duration_min,
        }
    }
}

/// Partial update of a provider's own assignment
#[derive(Debug, Clone, Default)]
pub struct ProviderServicePatch {
    pub custom_price_cents: Option<i64>,
    pub custom_duration: Option<i32>,
    pub extra_info: Option<String>,
}

impl ProviderServicePatch {
    pub fn is_empty(&self) -> bool {
        self.custom_price_cents.is_none()
            && self.custom_duration.is_none()
            && self.extra_info.is_none()
    }
}

/// Assignment with its service resolved for display
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub assignment: ProviderService,
    pub service: Service,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn grooming(id: i32) -> Service {
        Service {
            id,
            name: "Full groom".into(),
            base_price_cents: 4500,
            duration_min: 90,
            details: ServiceDetails::Grooming {
                tools_required: "clippers".into(),
                coat_type: "long".into(),
            },
        }
    }

    fn assignment() -> ProviderService {
        ProviderService {
            id: 1,
            provider_id: 7,
            service_id: 3,
            custom_price_cents: 4500,
            custom_duration: 90,
            extra_info: None,
        }
    }

    #[test]
    fn kind_follows_details_variant() {
        assert_eq!(grooming(1).kind(), ProviderKind::Groomer);
        let vet = ServiceDetails::Veterinary {
            animal_type: "dog".into(),
            emergency_available: true,
        };
        assert_eq!(vet.kind(), ProviderKind::Vet);
    }

    #[test]
    fn seeded_assignment_copies_base_terms() {
        let ps = NewProviderService::seeded_from(7, &grooming(3));
        assert_eq!(ps.provider_id, 7);
        assert_eq!(ps.service_id, 3);
        assert_eq!(ps.custom_price_cents, 4500);
        assert_eq!(ps.custom_duration, 90);
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let mut ps = assignment();
        ps.apply(ProviderServicePatch {
            custom_price_cents: Some(5000),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ps.custom_price_cents, 5000);
        assert_eq!(ps.custom_duration, 90);
        assert!(ps.extra_info.is_none());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let err = assignment().apply(ProviderServicePatch::default()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = assignment()
            .apply(ProviderServicePatch {
                custom_price_cents: Some(-1),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn details_deserialize_from_kind_tag() {
        let json = r#"{"kind":"sitter","max_pets":2,"overnight_available":true}"#;
        let details: ServiceDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.kind(), ProviderKind::Sitter);
    }

    #[test]
    fn new_service_requires_positive_duration() {
        let service = NewService {
            name: "Walk".into(),
            base_price_cents: 1000,
            duration_min: 0,
            details: ServiceDetails::Sitting {
                max_pets: 1,
                overnight_available: false,
            },
        };
        assert!(service.validate().is_err());
    }
}
