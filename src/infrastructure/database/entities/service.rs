//! Service entity: the base row of every catalog service
//!
//! Kind-specific attributes live in `veterinary_services`,
//! `grooming_services` and `sitting_services`, keyed by the same id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::provider::ProviderKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub base_price_cents: i64,
    pub duration_min: i32,
    /// Set on insert, never updated
    pub kind: ProviderKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::veterinary_service::Entity")]
    Veterinary,
    #[sea_orm(has_one = "super::grooming_service::Entity")]
    Grooming,
    #[sea_orm(has_one = "super::sitting_service::Entity")]
    Sitting,
    #[sea_orm(has_many = "super::provider_service::Entity")]
    ProviderServices,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::veterinary_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinary.def()
    }
}

impl Related<super::grooming_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grooming.def()
    }
}

impl Related<super::sitting_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sitting.def()
    }
}

impl Related<super::provider_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderServices.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
