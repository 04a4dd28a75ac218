//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_services;
mod m20240101_000003_create_provider_services;
mod m20240101_000004_create_provider_documents;
mod m20240101_000005_create_pets;
mod m20240101_000006_create_available_slots;
mod m20240101_000007_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_services::Migration),
            Box::new(m20240101_000003_create_provider_services::Migration),
            Box::new(m20240101_000004_create_provider_documents::Migration),
            Box::new(m20240101_000005_create_pets::Migration),
            Box::new(m20240101_000006_create_available_slots::Migration),
            Box::new(m20240101_000007_create_bookings::Migration),
        ]
    }
}
