//! Create available_slots table

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
                    .table(AvailableSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AvailableSlots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AvailableSlots::ProviderId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AvailableSlots::Date).date().not_null())
                    .col(ColumnDef::new(AvailableSlots::StartTime).time().not_null())
                    .col(ColumnDef::new(AvailableSlots::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(AvailableSlots::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_available_slots_provider")
                            .from(AvailableSlots::Table, AvailableSlots::ProviderId)
                            .to(Providers::Table, Providers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Exact start-time duplicates only; overlapping ranges are allowed
        manager
            .create_index(
                Index::create()
                    .name("uq_slot_provider_time")
                    .table(AvailableSlots::Table)
                    .col(AvailableSlots::ProviderId)
                    .col(AvailableSlots::Date)
                    .col(AvailableSlots::StartTime)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvailableSlots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AvailableSlots {
    Table,
    Id,
    ProviderId,
    Date,
    StartTime,
    EndTime,
    IsAvailable,
}
