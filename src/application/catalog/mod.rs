//! Catalog module: services and provider assignments

pub mod service;

pub use service::{CatalogService, ServiceCreation};
