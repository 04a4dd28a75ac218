//! Create provider_documents table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Providers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProviderDocuments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProviderDocuments::ProviderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderDocuments::DocumentType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderDocuments::FileUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderDocuments::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_documents_provider")
                            .from(ProviderDocuments::Table, ProviderDocuments::ProviderId)
                            .to(Providers::Table, Providers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_provider_doc_type")
                    .table(ProviderDocuments::Table)
                    .col(ProviderDocuments::ProviderId)
                    .col(ProviderDocuments::DocumentType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProviderDocuments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProviderDocuments {
    Table,
    Id,
    ProviderId,
    DocumentType,
    FileUrl,
    Status,
}
