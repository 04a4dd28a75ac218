//! Slot & booking repository interfaces

use async_trait::async_trait;

use super::model::{AvailableSlot, Booking, BookingDetails, BookingStatus, NewBooking, NewSlot};
use crate::domain::DomainResult;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Duplicate `(provider_id, date, start_time)` → `Conflict`.
    async fn insert(&self, slot: NewSlot) -> DomainResult<AvailableSlot>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AvailableSlot>>;
    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<AvailableSlot>>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn delete_for_provider(&self, provider_id: i32) -> DomainResult<u64>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert with status `pending`. Unique violations on `(slot_id, pet_id)`
    /// or `(pet_id, slot_id, service_id)` surface as `Conflict`.
    async fn insert(&self, booking: NewBooking) -> DomainResult<Booking>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;
    async fn find_details(&self, id: i32) -> DomainResult<Option<BookingDetails>>;
    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<BookingDetails>>;
    async fn list_for_owner(&self, owner_id: i32) -> DomainResult<Vec<BookingDetails>>;
    async fn list_for_pet(&self, pet_id: i32) -> DomainResult<Vec<Booking>>;
    async fn update_status(&self, id: i32, status: BookingStatus) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    /// Clear `slot_id` on every booking of the slot, keeping the rows.
    async fn detach_slot(&self, slot_id: i32) -> DomainResult<u64>;
}
