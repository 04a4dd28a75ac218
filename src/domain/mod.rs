pub mod catalog;
pub mod kind;
pub mod pet;
pub mod repositories;
pub mod scheduling;
pub mod user;

// Re-export commonly used types
pub use catalog::{
    CatalogEntry, NewService, ProviderService, ProviderServicePatch, Service, ServiceDetails,
};
pub use kind::ProviderKind;
pub use pet::{AnimalType, MedicalRecord, Pet, PetProfile, RecordType};
pub use repositories::{DomainResult, RepositoryProvider};
pub use scheduling::{AvailableSlot, Booking, BookingDetails, BookingStatus};
pub use user::{
    DocumentStatus, DocumentType, OwnerProfile, Provider, ProviderDocument, User, UserProfile,
    UserRole,
};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
