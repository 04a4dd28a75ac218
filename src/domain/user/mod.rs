//! User aggregate
//!
//! Owners and providers share the base `User` account; the subtype payload
//! is selected by role.

pub mod model;
pub mod repository;

pub use model::{
    DocumentStatus, DocumentType, NewProvider, NewUser, OwnerProfile, Provider, ProviderDocument,
    User, UserProfile, UserRole,
};
pub use repository::UserRepository;
