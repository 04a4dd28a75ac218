//! Database entities module

pub mod available_slot;
pub mod booking;
pub mod grooming_service;
pub mod medical_record;
pub mod owner;
pub mod pet;
pub mod provider;
pub mod provider_document;
pub mod provider_service;
pub mod service;
pub mod sitting_service;
pub mod user;
pub mod veterinary_service;

pub use available_slot::Entity as AvailableSlot;
pub use booking::Entity as Booking;
pub use medical_record::Entity as MedicalRecord;
pub use owner::Entity as Owner;
pub use pet::Entity as Pet;
pub use provider::Entity as Provider;
pub use provider_document::Entity as ProviderDocument;
pub use provider_service::Entity as ProviderService;
pub use service::Entity as Service;
pub use user::Entity as User;
