//! Provider entity: the service-provider subtype of a user

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::ProviderKind as DomainProviderKind;

/// Provider / service kind, shared with the services table
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ProviderKind {
    #[sea_orm(string_value = "vet")]
    Vet,
    #[sea_orm(string_value = "groomer")]
    Groomer,
    #[sea_orm(string_value = "sitter")]
    Sitter,
}

impl From<DomainProviderKind> for ProviderKind {
    fn from(kind: DomainProviderKind) -> Self {
        match kind {
            DomainProviderKind::Vet => Self::Vet,
            DomainProviderKind::Groomer => Self::Groomer,
            DomainProviderKind::Sitter => Self::Sitter,
        }
    }
}

impl From<ProviderKind> for DomainProviderKind {
    fn from(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Vet => Self::Vet,
            ProviderKind::Groomer => Self::Groomer,
            ProviderKind::Sitter => Self::Sitter,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    /// Same id as the base user row
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub company_name: String,
    pub kind: ProviderKind,
    pub service_radius_km: i32,
    pub hourly_rate_cents: i64,
    pub is_verified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Id",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::provider_service::Entity")]
    ProviderServices,
    #[sea_orm(has_many = "super::available_slot::Entity")]
    Slots,
    #[sea_orm(has_many = "super::provider_document::Entity")]
    Documents,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::provider_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderServices.def()
    }
}

impl Related<super::available_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slots.def()
    }
}

impl Related<super::provider_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
