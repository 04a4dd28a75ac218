pub mod auth;
pub mod bookings;
pub mod health;
pub mod pets;
pub mod services;
pub mod slots;
