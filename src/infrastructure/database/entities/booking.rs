//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::BookingStatus as DomainBookingStatus;

/// Booking status: pending → confirmed → completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl From<DomainBookingStatus> for BookingStatus {
    fn from(s: DomainBookingStatus) -> Self {
        match s {
            DomainBookingStatus::Pending => Self::Pending,
            DomainBookingStatus::Confirmed => Self::Confirmed,
            DomainBookingStatus::Completed => Self::Completed,
        }
    }
}

impl From<BookingStatus> for DomainBookingStatus {
    fn from(s: BookingStatus) -> Self {
        match s {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    /// Cleared when the slot is removed; the booking stays as history
    #[sea_orm(nullable)]
    pub slot_id: Option<i32>,
    pub service_id: i32,
    pub status: BookingStatus,
    #[sea_orm(nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id"
    )]
    Pet,
    #[sea_orm(
        belongs_to = "super::available_slot::Entity",
        from = "Column::SlotId",
        to = "super::available_slot::Column::Id"
    )]
    Slot,
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::available_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
