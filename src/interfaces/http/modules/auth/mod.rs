//! Authentication module: registration, login, profile, provider documents

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
