//! Create bookings table
//!
//! Both unique indexes are the only guard against double booking;
//! concurrent inserts race on them and the loser gets a constraint error.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_services::Services;
use super::m20240101_000005_create_pets::Pets;
use super::m20240101_000006_create_available_slots::AvailableSlots;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::PetId).integer().not_null())
                    .col(ColumnDef::new(Bookings::SlotId).integer())
                    .col(ColumnDef::new(Bookings::ServiceId).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Bookings::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_pet")
                            .from(Bookings::Table, Bookings::PetId)
                            .to(Pets::Table, Pets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_slot")
                            .from(Bookings::Table, Bookings::SlotId)
                            .to(AvailableSlots::Table, AvailableSlots::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_service")
                            .from(Bookings::Table, Bookings::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_booking_slot_pet")
                    .table(Bookings::Table)
                    .col(Bookings::SlotId)
                    .col(Bookings::PetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_booking_pet_slot_service")
                    .table(Bookings::Table)
                    .col(Bookings::PetId)
                    .col(Bookings::SlotId)
                    .col(Bookings::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    PetId,
    SlotId,
    ServiceId,
    Status,
    Notes,
}
