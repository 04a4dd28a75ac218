//! Pet entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::AnimalType as DomainAnimalType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum AnimalType {
    #[sea_orm(string_value = "dog")]
    Dog,
    #[sea_orm(string_value = "cat")]
    Cat,
}

impl From<DomainAnimalType> for AnimalType {
    fn from(t: DomainAnimalType) -> Self {
        match t {
            DomainAnimalType::Dog => Self::Dog,
            DomainAnimalType::Cat => Self::Cat,
        }
    }
}

impl From<AnimalType> for DomainAnimalType {
    fn from(t: AnimalType) -> Self {
        match t {
            AnimalType::Dog => Self::Dog,
            AnimalType::Cat => Self::Cat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub animal_type: AnimalType,
    pub breed: Option<String>,
    pub birth_date: Option<Date>,
    pub medical_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::medical_record::Entity")]
    MedicalRecords,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecords.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
