//! # PetCare marketplace service
//!
//! Connects pet owners with vets, groomers and sitters.
//!
//! ## Architecture
//!
//! - **domain**: entities, value types, repository traits and the catalog synchronizer
//! - **application**: use cases (identity, catalog, pets, slots, bookings)
//! - **infrastructure**: SeaORM storage, migrations and repositories
//! - **auth**: JWT, password hashing and the authorization guard
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{config_path_from_env, default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, DatabaseStorage};

// Re-export API router
pub use interfaces::http::create_api_router;
