//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::BookingDetails;
use crate::interfaces::http::modules::services::ServiceDto;
use crate::interfaces::http::modules::slots::SlotDto;

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub pet_id: i32,
    pub pet_name: String,
    /// `null` once the slot was withdrawn
    pub slot: Option<SlotDto>,
    pub service: ServiceDto,
    /// `pending`, `confirmed` or `completed`
    pub status: String,
    pub notes: Option<String>,
}

impl From<BookingDetails> for BookingDto {
    fn from(d: BookingDetails) -> Self {
        Self {
            id: d.booking.id,
            pet_id: d.pet.id,
            pet_name: d.pet.name,
            slot: d.slot.map(Into::into),
            service: d.service.into(),
            status: d.booking.status.to_string(),
            notes: d.booking.notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub pet_id: i32,
    pub slot_id: i32,
    pub service_id: i32,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// Target status: `confirmed` or `completed`
    #[schema(example = "confirmed")]
    pub status: String,
}
