//! Catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::ServiceCreation;
use crate::domain::{
    CatalogEntry, NewService, ProviderService, ProviderServicePatch, Service, ServiceDetails,
};

/// Kind-specific service payload; `kind` selects the variant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind")]
pub enum ServiceDetailsDto {
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

impl From<ServiceDetails> for ServiceDetailsDto {
    fn from(d: ServiceDetails) -> Self {
        match d {
            ServiceDetails::Veterinary {
                animal_type,
                emergency_available,
            } => Self::Veterinary {
                animal_type,
                emergency_available,
            },
            ServiceDetails::Grooming {
                tools_required,
                coat_type,
            } => Self::Grooming {
                tools_required,
                coat_type,
            },
            ServiceDetails::Sitting {
                max_pets,
                overnight_available,
            } => Self::Sitting {
                max_pets,
                overnight_available,
            },
        }
    }
}

impl From<ServiceDetailsDto> for ServiceDetails {
    fn from(d: ServiceDetailsDto) -> Self {
        match d {
            ServiceDetailsDto::Veterinary {
                animal_type,
                emergency_available,
            } => Self::Veterinary {
                animal_type,
                emergency_available,
            },
            ServiceDetailsDto::Grooming {
                tools_required,
                coat_type,
            } => Self::Grooming {
                tools_required,
                coat_type,
            },
            ServiceDetailsDto::Sitting {
                max_pets,
                overnight_available,
            } => Self::Sitting {
                max_pets,
                overnight_available,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub base_price_cents: i64,
    pub duration_min: i32,
    pub details: ServiceDetailsDto,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            base_price_cents: s.base_price_cents,
            duration_min: s.duration_min,
            details: s.details.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0))]
    pub base_price_cents: i64,
    #[validate(range(min = 1, max = 1440))]
    pub duration_min: i32,
    pub details: ServiceDetailsDto,
}

impl From<CreateServiceRequest> for NewService {
    fn from(r: CreateServiceRequest) -> Self {
        Self {
            name: r.name,
            base_price_cents: r.base_price_cents,
            duration_min: r.duration_min,
            details: r.details.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedServiceResponse {
    pub service: ServiceDto,
    /// Providers of the same kind the service was assigned to
    pub assigned_providers: usize,
}

impl From<ServiceCreation> for CreatedServiceResponse {
    fn from(c: ServiceCreation) -> Self {
        Self {
            service: c.service.into(),
            assigned_providers: c.assigned.len(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListServicesParams {
    /// Filter by kind: `vet`, `groomer` or `sitter`
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderServiceDto {
    pub id: i32,
    pub provider_id: i32,
    pub service_id: i32,
    pub custom_price_cents: i64,
    pub custom_duration: i32,
    pub extra_info: Option<String>,
}

impl From<ProviderService> for ProviderServiceDto {
    fn from(p: ProviderService) -> Self {
        Self {
            id: p.id,
            provider_id: p.provider_id,
            service_id: p.service_id,
            custom_price_cents: p.custom_price_cents,
            custom_duration: p.custom_duration,
            extra_info: p.extra_info,
        }
    }
}

/// A provider's catalog line: its own terms plus the service they apply to
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogEntryDto {
    pub assignment: ProviderServiceDto,
    pub service: ServiceDto,
}

impl From<CatalogEntry> for CatalogEntryDto {
    fn from(e: CatalogEntry) -> Self {
        Self {
            assignment: e.assignment.into(),
            service: e.service.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProviderServiceRequest {
    #[validate(range(min = 0))]
    pub custom_price_cents: Option<i64>,
    #[validate(range(min = 1, max = 1440))]
    pub custom_duration: Option<i32>,
    #[validate(length(max = 1000))]
    pub extra_info: Option<String>,
}

impl From<UpdateProviderServiceRequest> for ProviderServicePatch {
    fn from(r: UpdateProviderServiceRequest) -> Self {
        Self {
            custom_price_cents: r.custom_price_cents,
            custom_duration: r.custom_duration,
            extra_info: r.extra_info,
        }
    }
}
