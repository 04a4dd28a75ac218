//! Slot and booking domain entities

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Service;
use crate::domain::pet::Pet;
use crate::domain::{DomainError, DomainResult};

/// A provider's bookable interval
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableSlot {
    pub id: i32,
    pub provider_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl AvailableSlot {
    /// Whether `[start, end)` on `date` intersects this slot.
    ///
    /// Informational only: overlapping slots are accepted, only identical
    /// start instants are rejected by storage.
    pub fn overlaps(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        self.date == date && start < self.end_time && self.start_time < end
    }
}

#[derive(Debug, Clone)]
pub struct NewSlot {
    pub provider_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl NewSlot {
    pub fn validate(&self) -> DomainResult<()> {
        if self.end_time <= self.start_time {
            return Err(DomainError::Validation(
                "Slot end time must be after its start time".into(),
            ));
        }
        Ok(())
    }
}

/// Booking status
///
/// `Pending → Confirmed → Completed`; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The only status reachable from this one, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::Validation(format!(
                "Unknown booking status: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An owner's pet reserved against one slot and one service
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub pet_id: i32,
    /// Cleared when the slot is withdrawn; the booking is kept as history.
    pub slot_id: Option<i32>,
    pub service_id: i32,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

impl Booking {
    pub fn ensure_deletable(&self) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidState(format!(
                "Booking {} is completed and cannot be deleted",
                self.id
            )));
        }
        Ok(())
    }

    /// Move forward one step to `target`.
    pub fn advance_to(&mut self, target: BookingStatus) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidState(format!(
                "Booking {} is completed and cannot change",
                self.id
            )));
        }
        if self.status.next() != Some(target) {
            return Err(DomainError::InvalidState(format!(
                "Booking {} cannot move from {} to {}",
                self.id, self.status, target
            )));
        }
        self.status = target;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub pet_id: i32,
    pub slot_id: i32,
    pub service_id: i32,
    pub notes: Option<String>,
}

/// Booking with pet, slot and service resolved for display
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub booking: Booking,
    pub pet: Pet,
    pub slot: Option<AvailableSlot>,
    pub service: Service,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn slot() -> AvailableSlot {
        AvailableSlot {
            id: 1,
            provider_id: 5,
            date: day(),
            start_time: time(9, 0),
            end_time: time(10, 0),
            is_available: true,
        }
    }

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: 3,
            pet_id: 7,
            slot_id: Some(1),
            service_id: 9,
            status,
            notes: None,
        }
    }

    #[test]
    fn overlapping_range_is_detected() {
        assert!(slot().overlaps(day(), time(9, 30), time(10, 30)));
    }

    #[test]
    fn adjacent_range_does_not_overlap() {
        assert!(!slot().overlaps(day(), time(10, 0), time(11, 0)));
        assert!(!slot().overlaps(day().succ_opt().unwrap(), time(9, 0), time(10, 0)));
    }

    #[test]
    fn slot_must_end_after_start() {
        let new_slot = NewSlot {
            provider_id: 5,
            date: day(),
            start_time: time(10, 0),
            end_time: time(10, 0),
            is_available: true,
        };
        assert!(matches!(new_slot.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn new_booking_defaults_to_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn status_moves_forward_one_step() {
        let mut b = booking(BookingStatus::Pending);
        b.advance_to(BookingStatus::Confirmed).unwrap();
        b.advance_to(BookingStatus::Completed).unwrap();
        assert_eq!(b.status, BookingStatus::Completed);
    }

    #[test]
    fn status_cannot_skip_or_reverse() {
        let mut b = booking(BookingStatus::Pending);
        assert!(b.advance_to(BookingStatus::Completed).is_err());

        let mut b = booking(BookingStatus::Confirmed);
        assert!(b.advance_to(BookingStatus::Pending).is_err());
        assert_eq!(b.status, BookingStatus::Confirmed);
    }

    #[test]
    fn completed_booking_is_immutable_and_undeletable() {
        let mut b = booking(BookingStatus::Completed);
        assert!(matches!(b.ensure_deletable(), Err(DomainError::InvalidState(_))));
        assert!(matches!(
            b.advance_to(BookingStatus::Confirmed),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn pending_and_confirmed_bookings_are_deletable() {
        assert!(booking(BookingStatus::Pending).ensure_deletable().is_ok());
        assert!(booking(BookingStatus::Confirmed).ensure_deletable().is_ok());
    }

    #[test]
    fn status_display_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<BookingStatus>().unwrap(), status);
        }
    }
}
