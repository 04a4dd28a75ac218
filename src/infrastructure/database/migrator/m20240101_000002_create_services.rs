//! Create services table and its per-kind attribute tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Name).string().not_null())
                    .col(
                        ColumnDef::new(Services::BasePriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Services::DurationMin).integer().not_null())
                    .col(ColumnDef::new(Services::Kind).string_len(16).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_kind")
                    .table(Services::Table)
                    .col(Services::Kind)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VeterinaryServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VeterinaryServices::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VeterinaryServices::AnimalType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VeterinaryServices::EmergencyAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinary_services_service")
                            .from(VeterinaryServices::Table, VeterinaryServices::Id)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroomingServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroomingServices::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GroomingServices::ToolsRequired)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroomingServices::CoatType)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grooming_services_service")
                            .from(GroomingServices::Table, GroomingServices::Id)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SittingServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SittingServices::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SittingServices::MaxPets)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(SittingServices::OvernightAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sitting_services_service")
                            .from(SittingServices::Table, SittingServices::Id)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SittingServices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroomingServices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VeterinaryServices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Services {
    Table,
    Id,
    Name,
    BasePriceCents,
    DurationMin,
    Kind,
}

#[derive(Iden)]
pub enum VeterinaryServices {
    Table,
    Id,
    AnimalType,
    EmergencyAvailable,
}

#[derive(Iden)]
pub enum GroomingServices {
    Table,
    Id,
    ToolsRequired,
    CoatType,
}

#[derive(Iden)]
pub enum SittingServices {
    Table,
    Id,
    MaxPets,
    OvernightAvailable,
}
