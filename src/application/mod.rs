pub mod catalog;
pub mod identity;
pub mod pets;
pub mod scheduling;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for convenience
pub use catalog::{CatalogService, ServiceCreation};
pub use identity::{
    AccountInput, AuthResult, ProviderRegistration, RegisterOwner, RegisterProvider, UserService,
};
pub use pets::{PetInput, PetService, RecordInput};
pub use scheduling::{BookingService, SlotService};
