//! Authentication and Authorization module
//!
//! JWT issuing/verification, password hashing and the authorization guard
//! consulted by every mutating use case.

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::{ensure_service_group, ActiveProvider, Caller, ProviderAccess};
pub use jwt::{create_token, verify_token, Claims, JwtConfig};
pub use password::{hash_password, verify_password};
