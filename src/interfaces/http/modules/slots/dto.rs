//! Slot DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::AvailableSlot;

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotDto {
    pub id: i32,
    pub provider_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl From<AvailableSlot> for SlotDto {
    fn from(s: AvailableSlot) -> Self {
        Self {
            id: s.id,
            provider_id: s.provider_id,
            date: s.date,
            start_time: s.start_time,
            end_time: s.end_time,
            is_available: s.is_available,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSlotRequest {
    #[schema(example = "2026-05-04")]
    pub date: NaiveDate,
    #[schema(example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(example = "10:00:00")]
    pub end_time: NaiveTime,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}
