//! Catalog module: services and per-provider assignments

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
