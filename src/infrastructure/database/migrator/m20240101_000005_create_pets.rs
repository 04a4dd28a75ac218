//! Create pets and medical_records tables

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Owners;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pets::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Pets::Name).string().not_null())
                    .col(ColumnDef::new(Pets::AnimalType).string_len(8).not_null())
                    .col(ColumnDef::new(Pets::Breed).string())
                    .col(ColumnDef::new(Pets::BirthDate).date())
                    .col(ColumnDef::new(Pets::MedicalNotes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pets_owner")
                            .from(Pets::Table, Pets::OwnerId)
                            .to(Owners::Table, Owners::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_owner")
                    .table(Pets::Table)
                    .col(Pets::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicalRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MedicalRecords::PetId).integer().not_null())
                    .col(
                        ColumnDef::new(MedicalRecords::RecordType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalRecords::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalRecords::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MedicalRecords::DocumentUrl).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_records_pet")
                            .from(MedicalRecords::Table, MedicalRecords::PetId)
                            .to(Pets::Table, Pets::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pets {
    Table,
    Id,
    OwnerId,
    Name,
    AnimalType,
    Breed,
    BirthDate,
    MedicalNotes,
}

#[derive(Iden)]
pub enum MedicalRecords {
    Table,
    Id,
    PetId,
    RecordType,
    Description,
    Date,
    DocumentUrl,
}
