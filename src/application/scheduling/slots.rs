//! Slot management
//!
//! Providers publish and withdraw bookable time slots. Storage rejects a
//! second slot starting at the same instant; overlapping ranges are only
//! reported.

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::auth::Caller;
use crate::domain::scheduling::NewSlot;
use crate::domain::{AvailableSlot, DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::DatabaseStorage;

#[derive(Clone)]
pub struct SlotService {
    storage: DatabaseStorage,
}

impl SlotService {
    pub fn new(storage: DatabaseStorage) -> Self {
        Self { storage }
    }

    pub async fn create_slot(
        &self,
        caller: &Caller,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        is_available: bool,
    ) -> DomainResult<AvailableSlot> {
        let provider = caller.require_active_provider()?;
        let new_slot = NewSlot {
            provider_id: provider.id,
            date,
            start_time,
            end_time,
            is_available,
        };
        new_slot.validate()?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        let existing = repos.slots().list_for_provider(provider.id).await?;
        if let Some(other) = existing
            .iter()
            .find(|s| s.start_time != start_time && s.overlaps(date, start_time, end_time))
        {
            warn!(
                provider_id = provider.id,
                slot_id = other.id,
                %date,
                %start_time,
                %end_time,
                "New slot overlaps an existing one"
            );
        }

        let slot = repos.slots().insert(new_slot).await.map_err(|e| match e {
            DomainError::Conflict(_) => DomainError::Conflict(format!(
                "A slot starting at {} {} already exists",
                date, start_time
            )),
            other => other,
        })?;
        uow.commit().await?;

        info!(slot_id = slot.id, provider_id = provider.id, "Slot published");
        Ok(slot)
    }

    /// Every slot of the provider, booked or not.
    pub async fn list_slots(&self, provider_id: i32) -> DomainResult<Vec<AvailableSlot>> {
        let repos = self.storage.repos();
        if repos.users().find_provider(provider_id).await?.is_none() {
            return Err(DomainError::not_found("Provider", provider_id));
        }
        repos.slots().list_for_provider(provider_id).await
    }

    /// Withdraw a slot. Bookings on it are kept with their slot cleared.
    pub async fn delete_slot(&self, caller: &Caller, slot_id: i32) -> DomainResult<()> {
        let provider = caller.require_active_provider()?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let slot = repos
            .slots()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| DomainError::not_found("AvailableSlot", slot_id))?;
        if slot.provider_id != provider.id {
            return Err(DomainError::PermissionDenied(
                "Slot belongs to another provider".into(),
            ));
        }

        let detached = repos.bookings().detach_slot(slot_id).await?;
        repos.slots().delete(slot_id).await?;
        uow.commit().await?;

        info!(slot_id, detached, "Slot withdrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{at, day, fixture};
    use crate::domain::{ProviderKind, ServiceDetails};

    #[tokio::test]
    async fn provider_publishes_and_lists_slots() {
        let f = fixture().await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let caller = f.users.resolve_caller(groomer.id).await.unwrap();

        f.slots
            .create_slot(&caller, day(), at(14), at(15), false)
            .await
            .unwrap();
        f.slots
            .create_slot(&caller, day(), at(9), at(10), true)
            .await
            .unwrap();

        let slots = f.slots.list_slots(groomer.id).await.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start_time, at(9));
        assert!(!slots[1].is_available);
    }

    #[tokio::test]
    async fn same_start_instant_is_a_conflict() {
        let f = fixture().await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let caller = f.users.resolve_caller(groomer.id).await.unwrap();

        f.slots
            .create_slot(&caller, day(), at(9), at(10), true)
            .await
            .unwrap();
        let err = f
            .slots
            .create_slot(&caller, day(), at(9), at(11), true)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn overlapping_slots_are_accepted() {
        let f = fixture().await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let caller = f.users.resolve_caller(groomer.id).await.unwrap();

        f.slots
            .create_slot(&caller, day(), at(9), at(11), true)
            .await
            .unwrap();
        f.slots
            .create_slot(&caller, day(), at(10), at(12), true)
            .await
            .unwrap();
        assert_eq!(f.slots.list_slots(groomer.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let f = fixture().await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let caller = f.users.resolve_caller(groomer.id).await.unwrap();

        let err = f
            .slots
            .create_slot(&caller, day(), at(11), at(10), true)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn owners_and_unverified_vets_cannot_publish() {
        let f = fixture().await;
        let owner = f.owner("o@example.com").await;
        let vet = f.provider("v@example.com", ProviderKind::Vet).await;
        let vet_caller = f.users.resolve_caller(vet.id).await.unwrap();

        for caller in [Caller::owner(owner.id), vet_caller] {
            let err = f
                .slots
                .create_slot(&caller, day(), at(9), at(10), true)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::PermissionDenied(_)));
        }
    }

    #[tokio::test]
    async fn deleting_slot_keeps_booking_history() {
        let f = fixture().await;
        let service = f
            .service(
                "Bath",
                ServiceDetails::Grooming {
                    tools_required: "shampoo".into(),
                    coat_type: "any".into(),
                },
            )
            .await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Rex").await;
        let slot = f.slot(groomer.id, 9).await;
        let booking = f.book(owner.id, pet.id, slot.id, service.id).await;

        let caller = f.users.resolve_caller(groomer.id).await.unwrap();
        f.slots.delete_slot(&caller, slot.id).await.unwrap();

        assert!(f.slots.list_slots(groomer.id).await.unwrap().is_empty());
        let details = f
            .bookings
            .get_booking(&Caller::owner(owner.id), booking.booking.id)
            .await
            .unwrap();
        assert!(details.booking.slot_id.is_none());
    }

    #[tokio::test]
    async fn provider_cannot_delete_foreign_slot() {
        let f = fixture().await;
        let first = f.provider("a@example.com", ProviderKind::Sitter).await;
        let second = f.provider("b@example.com", ProviderKind::Sitter).await;
        let slot = f.slot(first.id, 9).await;
        let intruder = f.users.resolve_caller(second.id).await.unwrap();

        let err = f.slots.delete_slot(&intruder, slot.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
        assert_eq!(f.slots.list_slots(first.id).await.unwrap().len(), 1);
    }
}
