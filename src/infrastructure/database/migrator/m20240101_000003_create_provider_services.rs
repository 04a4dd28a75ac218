//! Create provider_services table
//!
//! One row per (provider, service) pair; the unique index is what makes
//! duplicate assignments impossible.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Providers;
use super::m20240101_000002_create_services::Services;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProviderServices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::ProviderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::CustomPriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::CustomDuration)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProviderServices::ExtraInfo).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_services_provider")
                            .from(ProviderServices::Table, ProviderServices::ProviderId)
                            .to(Providers::Table, Providers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_services_service")
                            .from(ProviderServices::Table, ProviderServices::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_provider_service")
                    .table(ProviderServices::Table)
                    .col(ProviderServices::ProviderId)
                    .col(ProviderServices::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProviderServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProviderServices {
    Table,
    Id,
    ProviderId,
    ServiceId,
    CustomPriceCents,
    CustomDuration,
    ExtraInfo,
}
