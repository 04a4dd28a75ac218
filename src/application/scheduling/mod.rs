//! Scheduling module: provider slots and bookings

pub mod bookings;
pub mod slots;

pub use bookings::BookingService;
pub use slots::SlotService;
