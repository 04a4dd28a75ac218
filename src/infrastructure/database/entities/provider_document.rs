//! Provider verification document entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{DocumentStatus as DomainDocumentStatus, DocumentType as DomainDocumentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DocumentType {
    #[sea_orm(string_value = "license")]
    License,
    #[sea_orm(string_value = "certificate")]
    Certificate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DocumentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<DomainDocumentType> for DocumentType {
    fn from(t: DomainDocumentType) -> Self {
        match t {
            DomainDocumentType::License => Self::License,
            DomainDocumentType::Certificate => Self::Certificate,
        }
    }
}

impl From<DocumentType> for DomainDocumentType {
    fn from(t: DocumentType) -> Self {
        match t {
            DocumentType::License => Self::License,
            DocumentType::Certificate => Self::Certificate,
        }
    }
}

impl From<DomainDocumentStatus> for DocumentStatus {
    fn from(s: DomainDocumentStatus) -> Self {
        match s {
            DomainDocumentStatus::Pending => Self::Pending,
            DomainDocumentStatus::Approved => Self::Approved,
            DomainDocumentStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<DocumentStatus> for DomainDocumentStatus {
    fn from(s: DocumentStatus) -> Self {
        match s {
            DocumentStatus::Pending => Self::Pending,
            DocumentStatus::Approved => Self::Approved,
            DocumentStatus::Rejected => Self::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider_documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub provider_id: i32,
    pub document_type: DocumentType,
    pub file_url: String,
    pub status: DocumentStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::Id"
    )]
    Provider,
}

impl Related<super::provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
