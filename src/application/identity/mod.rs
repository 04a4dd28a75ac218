//! Identity module: accounts & authentication
//!
//! Contains the `UserService` which orchestrates registration, login,
//! caller resolution, provider verification and account removal.

pub mod service;

pub use service::{
    AccountInput, AuthResult, ProviderRegistration, RegisterOwner, RegisterProvider, UserService,
};
