//! Catalog aggregate
//!
//! Services, their per-provider assignments and the synchronizer keeping the
//! two complete.

pub mod model;
pub mod repository;
pub mod synchronizer;

pub use model::{
    CatalogEntry, NewProviderService, NewService, ProviderService, ProviderServicePatch, Service,
    ServiceDetails,
};
pub use repository::{ProviderServiceRepository, ServiceRepository};
