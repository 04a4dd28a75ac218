//! Medical record entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::RecordType as DomainRecordType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RecordType {
    #[sea_orm(string_value = "vaccine")]
    Vaccine,
    #[sea_orm(string_value = "diagnosis")]
    Diagnosis,
    #[sea_orm(string_value = "allergy")]
    Allergy,
}

impl From<DomainRecordType> for RecordType {
    fn from(t: DomainRecordType) -> Self {
        match t {
            DomainRecordType::Vaccine => Self::Vaccine,
            DomainRecordType::Diagnosis => Self::Diagnosis,
            DomainRecordType::Allergy => Self::Allergy,
        }
    }
}

impl From<RecordType> for DomainRecordType {
    fn from(t: RecordType) -> Self {
        match t {
            RecordType::Vaccine => Self::Vaccine,
            RecordType::Diagnosis => Self::Diagnosis,
            RecordType::Allergy => Self::Allergy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    pub record_type: RecordType,
    pub description: String,
    pub date: DateTime<Utc>,
    pub document_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id"
    )]
    Pet,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
