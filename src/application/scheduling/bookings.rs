//! Booking orchestrator
//!
//! Owners reserve a slot for one of their pets and a catalog service.
//! Double booking is prevented by the storage unique constraints, never by a
//! read-then-write check, so concurrent requests for the same pair resolve
//! to exactly one success and one `Conflict`. The slot must be open and the
//! service must belong to the slot provider's kind.

use tracing::info;

use crate::auth::{ensure_service_group, Caller};
use crate::domain::scheduling::NewBooking;
use crate::domain::{
    BookingDetails, BookingStatus, DomainError, DomainResult, RepositoryProvider, UserRole,
};
use crate::infrastructure::DatabaseStorage;

const DOUBLE_BOOKING: &str = "slot already booked or service already reserved";

#[derive(Clone)]
pub struct BookingService {
    storage: DatabaseStorage,
}

impl BookingService {
    pub fn new(storage: DatabaseStorage) -> Self {
        Self { storage }
    }

    pub async fn create_booking(
        &self,
        caller: &Caller,
        pet_id: i32,
        slot_id: i32,
        service_id: i32,
        notes: Option<String>,
    ) -> DomainResult<BookingDetails> {
        caller.require_owner()?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        // Must stay the first statement of the unit of work: a concurrent
        // duplicate then waits on the write lock and fails on the unique index.
        let inserted = repos
            .bookings()
            .insert(NewBooking {
                pet_id,
                slot_id,
                service_id,
                notes,
            })
            .await;

        // Checks run against the same transaction. Returning early drops the
        // unit of work, which rolls the insert back.
        let pet = repos
            .pets()
            .find_by_id(pet_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Pet", pet_id))?;
        caller.ensure_owns(pet.owner_id, "Pet")?;

        let slot = repos
            .slots()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| DomainError::not_found("AvailableSlot", slot_id))?;
        let service = repos
            .services()
            .find_by_id(service_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", service_id))?;

        if !slot.is_available {
            return Err(DomainError::InvalidState(format!(
                "Slot {} is not open for booking",
                slot_id
            )));
        }
        let provider = repos
            .users()
            .find_provider(slot.provider_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Provider", slot.provider_id))?;
        ensure_service_group(provider.kind, &service)?;

        let booking = inserted.map_err(|e| match e {
            DomainError::Conflict(_) => DomainError::Conflict(DOUBLE_BOOKING.into()),
            other => other,
        })?;
        uow.commit().await?;

        info!(
            booking_id = booking.id,
            pet_id,
            slot_id,
            service_id,
            "Booking created"
        );
        Ok(BookingDetails {
            booking,
            pet,
            slot: Some(slot),
            service,
        })
    }

    /// Visible to the pet's owner and the provider of the booked slot.
    pub async fn get_booking(&self, caller: &Caller, id: i32) -> DomainResult<BookingDetails> {
        let details = self.load(&self.storage.repos(), id).await?;
        match caller.role {
            UserRole::Owner => caller.ensure_owns(details.pet.owner_id, "Booking")?,
            _ => {
                let provider = caller.require_provider()?;
                ensure_slot_provider(&details, provider.id)?;
            }
        }
        Ok(details)
    }

    /// Completed bookings can never be deleted, whoever asks.
    pub async fn delete_booking(&self, caller: &Caller, id: i32) -> DomainResult<()> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let details = self.load(&repos, id).await?;
        details.booking.ensure_deletable()?;
        authorize_participant(caller, &details)?;

        repos.bookings().delete(id).await?;
        uow.commit().await?;

        info!(booking_id = id, by = caller.user_id, "Booking deleted");
        Ok(())
    }

    /// Move a booking one step forward. The slot's provider may confirm or
    /// complete; the pet's owner may only confirm.
    pub async fn advance_status(
        &self,
        caller: &Caller,
        id: i32,
        target: BookingStatus,
    ) -> DomainResult<BookingDetails> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let mut details = self.load(&repos, id).await?;

        let from = details.booking.status;
        details.booking.advance_to(target)?;

        if caller.role == UserRole::Owner && target != BookingStatus::Confirmed {
            return Err(DomainError::PermissionDenied(format!(
                "Owners cannot mark a booking {}",
                target
            )));
        }
        authorize_participant(caller, &details)?;

        repos.bookings().update_status(id, target).await?;
        uow.commit().await?;

        info!(booking_id = id, %from, to = %target, "Booking status changed");
        Ok(details)
    }

    pub async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<BookingDetails>> {
        self.storage
            .repos()
            .bookings()
            .list_for_provider(provider_id)
            .await
    }

    pub async fn list_for_owner(&self, owner_id: i32) -> DomainResult<Vec<BookingDetails>> {
        self.storage.repos().bookings().list_for_owner(owner_id).await
    }

    async fn load(&self, repos: &dyn RepositoryProvider, id: i32) -> DomainResult<BookingDetails> {
        repos
            .bookings()
            .find_details(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", id))
    }
}

/// Mutations are open to the pet's owner and the active provider of the slot.
fn authorize_participant(caller: &Caller, details: &BookingDetails) -> DomainResult<()> {
    match caller.role {
        UserRole::Owner => caller.ensure_owns(details.pet.owner_id, "Booking"),
        _ => {
            let provider = caller.require_active_provider()?;
            ensure_slot_provider(details, provider.id)
        }
    }
}

fn ensure_slot_provider(details: &BookingDetails, provider_id: i32) -> DomainResult<()> {
    match &details.slot {
        Some(slot) if slot.provider_id == provider_id => Ok(()),
        _ => Err(DomainError::PermissionDenied(
            "Booking is not on one of the caller's slots".into(),
        )),
    }
}
