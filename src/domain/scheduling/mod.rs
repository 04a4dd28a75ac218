//! Scheduling aggregate
//!
//! Contains provider slots, bookings, and their repository interfaces.

pub mod model;
pub mod repository;

pub use model::{AvailableSlot, Booking, BookingDetails, BookingStatus, NewBooking, NewSlot};
pub use repository::{BookingRepository, SlotRepository};
