//! Bookings module: reservations of slots for pets

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
