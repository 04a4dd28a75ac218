//! SeaORM implementation of RepositoryProvider

use sea_orm::ConnectionTrait;

use crate::domain::catalog::{ProviderServiceRepository, ServiceRepository};
use crate::domain::pet::PetRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::scheduling::{BookingRepository, SlotRepository};
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::pet_repository::SeaOrmPetRepository;
use super::provider_service_repository::SeaOrmProviderServiceRepository;
use super::service_repository::SeaOrmServiceRepository;
use super::slot_repository::SeaOrmSlotRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Borrows one connection handle (a pool or an open transaction) and
/// exposes per-aggregate repository accessors over it.
///
/// ```ignore
/// let uow = storage.begin().await?;
/// let repos = uow.repos();
/// let slot = repos.slots().find_by_id(7).await?;
/// let bookings = repos.bookings().list_for_provider(3).await?;
/// ```
pub struct SeaOrmRepositoryProvider<'a, C> {
    users: SeaOrmUserRepository<'a, C>,
    services: SeaOrmServiceRepository<'a, C>,
    provider_services: SeaOrmProviderServiceRepository<'a, C>,
    pets: SeaOrmPetRepository<'a, C>,
    slots: SeaOrmSlotRepository<'a, C>,
    bookings: SeaOrmBookingRepository<'a, C>,
}

impl<'a, C: ConnectionTrait> SeaOrmRepositoryProvider<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db),
            services: SeaOrmServiceRepository::new(db),
            provider_services: SeaOrmProviderServiceRepository::new(db),
            pets: SeaOrmPetRepository::new(db),
            slots: SeaOrmSlotRepository::new(db),
            bookings: SeaOrmBookingRepository::new(db),
        }
    }
}

impl<'a, C> RepositoryProvider for SeaOrmRepositoryProvider<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn provider_services(&self) -> &dyn ProviderServiceRepository {
        &self.provider_services
    }

    fn pets(&self) -> &dyn PetRepository {
        &self.pets
    }

    fn slots(&self) -> &dyn SlotRepository {
        &self.slots
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }
}
