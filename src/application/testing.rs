//! Shared fixtures for application service tests

use chrono::{NaiveDate, NaiveTime};
use sea_orm::ConnectionTrait;

use crate::application::catalog::CatalogService;
use crate::application::identity::{AccountInput, RegisterOwner, RegisterProvider, UserService};
use crate::application::pets::{PetInput, PetService};
use crate::application::scheduling::{BookingService, SlotService};
use crate::auth::{Caller, JwtConfig};
use crate::domain::{
    AnimalType, AvailableSlot, BookingDetails, NewService, Pet, Provider, ProviderKind, Service,
    ServiceDetails, User,
};
use crate::infrastructure::database::storage::testing::in_memory_storage;
use crate::infrastructure::DatabaseStorage;

pub fn account(email: &str) -> AccountInput {
    AccountInput {
        email: email.into(),
        password: "password123".into(),
        first_name: "Jane".into(),
        surname: "Doe".into(),
        patronymic: None,
    }
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()
}

pub fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

pub struct Fixture {
    pub storage: DatabaseStorage,
    pub users: UserService,
    pub catalog: CatalogService,
    pub slots: SlotService,
    pub bookings: BookingService,
    pub pets: PetService,
}

pub async fn fixture() -> Fixture {
    fixture_on(in_memory_storage().await)
}

pub fn fixture_on(storage: DatabaseStorage) -> Fixture {
    Fixture {
        users: UserService::new(storage.clone(), JwtConfig::default(), crate::auth::password::MIN_COST),
        catalog: CatalogService::new(storage.clone()),
        slots: SlotService::new(storage.clone()),
        bookings: BookingService::new(storage.clone()),
        pets: PetService::new(storage.clone()),
        storage,
    }
}

impl Fixture {
    pub async fn owner(&self, email: &str) -> User {
        self.users
            .register_owner(RegisterOwner {
                account: account(email),
                phone: None,
                address: None,
            })
            .await
            .unwrap()
    }

    pub async fn provider(&self, email: &str, kind: ProviderKind) -> Provider {
        self.users
            .register_provider(RegisterProvider {
                account: account(email),
                company_name: format!("{} Co", kind),
                kind,
                service_radius_km: None,
                hourly_rate_cents: 2000,
            })
            .await
            .unwrap()
            .provider
    }

    pub async fn service(&self, name: &str, details: ServiceDetails) -> Service {
        self.catalog
            .create_service(NewService {
                name: name.into(),
                base_price_cents: 1500,
                duration_min: 60,
                details,
            })
            .await
            .unwrap()
            .service
    }

    pub async fn pet(&self, owner_id: i32, name: &str) -> Pet {
        self.pets
            .create_pet(
                &Caller::owner(owner_id),
                PetInput {
                    name: name.into(),
                    animal_type: AnimalType::Dog,
                    breed: None,
                    birth_date: None,
                    medical_notes: None,
                },
            )
            .await
            .unwrap()
    }

    /// One-hour slot on [`day`] starting at `hour`, published by the provider.
    pub async fn slot(&self, provider_id: i32, hour: u32) -> AvailableSlot {
        let caller = self.users.resolve_caller(provider_id).await.unwrap();
        self.slots
            .create_slot(&caller, day(), at(hour), at(hour + 1), true)
            .await
            .unwrap()
    }

    pub async fn book(
        &self,
        owner_id: i32,
        pet_id: i32,
        slot_id: i32,
        service_id: i32,
    ) -> BookingDetails {
        self.bookings
            .create_booking(&Caller::owner(owner_id), pet_id, slot_id, service_id, None)
            .await
            .unwrap()
    }

    /// Make every provider/service assignment insert fail once the table
    /// already holds `existing` rows, so a fan-out breaks part way through.
    pub async fn reject_assignments_after(&self, existing: u32) {
        let sql = format!(
            "CREATE TRIGGER reject_assignment AFTER INSERT ON provider_services \
             WHEN (SELECT COUNT(*) FROM provider_services) > {existing} \
             BEGIN SELECT RAISE(ABORT, 'assignment rejected'); END;"
        );
        self.storage
            .connection()
            .execute_unprepared(&sql)
            .await
            .unwrap();
    }

    pub async fn accept_assignments(&self) {
        self.storage
            .connection()
            .execute_unprepared("DROP TRIGGER reject_assignment;")
            .await
            .unwrap();
    }
}
