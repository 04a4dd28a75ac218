//! Pet & medical record service
//!
//! Every operation is scoped to the calling owner: a pet is only visible to
//! the owner it belongs to.

use tracing::info;

use crate::auth::Caller;
use crate::domain::pet::{MedicalRecordUpdate, NewMedicalRecord, NewPet, PetUpdate};
use crate::domain::{
    AnimalType, DomainError, DomainResult, MedicalRecord, Pet, PetProfile, RecordType,
    RepositoryProvider,
};
use crate::infrastructure::DatabaseStorage;

#[derive(Debug, Clone)]
pub struct PetInput {
    pub name: String,
    pub animal_type: AnimalType,
    pub breed: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub medical_notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordInput {
    pub record_type: RecordType,
    pub description: String,
    pub document_url: Option<String>,
}

/// Remove a pet together with its bookings and medical records.
///
/// Fails with `InvalidState` when any of its bookings is completed, leaving
/// everything in place.
pub(crate) async fn remove_pet(repos: &dyn RepositoryProvider, pet_id: i32) -> DomainResult<()> {
    let bookings = repos.bookings().list_for_pet(pet_id).await?;
    if let Some(done) = bookings.iter().find(|b| b.status.is_terminal()) {
        return Err(DomainError::InvalidState(format!(
            "Pet {} has completed booking {} and cannot be removed",
            pet_id, done.id
        )));
    }

    for booking in &bookings {
        repos.bookings().delete(booking.id).await?;
    }
    let records = repos.pets().delete_records_for_pet(pet_id).await?;
    repos.pets().delete(pet_id).await?;

    info!(
        pet_id,
        bookings = bookings.len(),
        records,
        "Pet removed"
    );
    Ok(())
}

#[derive(Clone)]
pub struct PetService {
    storage: DatabaseStorage,
}

impl PetService {
    pub fn new(storage: DatabaseStorage) -> Self {
        Self { storage }
    }

    // ── Pets ────────────────────────────────────────────────────

    pub async fn create_pet(&self, caller: &Caller, input: PetInput) -> DomainResult<Pet> {
        let owner_id = caller.require_owner()?;
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Pet name is required".into()));
        }

        let uow = self.storage.begin().await?;
        let pet = uow
            .repos()
            .pets()
            .insert(NewPet {
                owner_id,
                name: input.name,
                animal_type: input.animal_type,
                breed: input.breed,
                birth_date: input.birth_date,
                medical_notes: input.medical_notes,
            })
            .await?;
        uow.commit().await?;

        info!(pet_id = pet.id, owner_id, "Pet registered");
        Ok(pet)
    }

    pub async fn list_pets(&self, caller: &Caller) -> DomainResult<Vec<Pet>> {
        let owner_id = caller.require_owner()?;
        self.storage.repos().pets().list_for_owner(owner_id).await
    }

    pub async fn get_pet(&self, caller: &Caller, pet_id: i32) -> DomainResult<PetProfile> {
        let repos = self.storage.repos();
        let pet = owned_pet(&repos, caller, pet_id).await?;
        let medical_records = repos.pets().list_records(pet.id).await?;
        Ok(PetProfile {
            pet,
            medical_records,
        })
    }

    pub async fn update_pet(
        &self,
        caller: &Caller,
        pet_id: i32,
        update: PetUpdate,
    ) -> DomainResult<Pet> {
        if matches!(&update.name, Some(name) if name.trim().is_empty()) {
            return Err(DomainError::Validation("Pet name cannot be blank".into()));
        }

        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let mut pet = owned_pet(&repos, caller, pet_id).await?;
        pet.apply(update);
        repos.pets().update(pet.clone()).await?;
        uow.commit().await?;
        Ok(pet)
    }

    pub async fn delete_pet(&self, caller: &Caller, pet_id: i32) -> DomainResult<()> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        owned_pet(&repos, caller, pet_id).await?;
        remove_pet(&repos, pet_id).await?;
        uow.commit().await
    }

    // ── Medical records ─────────────────────────────────────────

    pub async fn add_record(
        &self,
        caller: &Caller,
        pet_id: i32,
        input: RecordInput,
    ) -> DomainResult<MedicalRecord> {
        if input.description.trim().is_empty() {
            return Err(DomainError::Validation("Description is required".into()));
        }

        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        owned_pet(&repos, caller, pet_id).await?;
        let record = repos
            .pets()
            .insert_record(NewMedicalRecord {
                pet_id,
                record_type: input.record_type,
                description: input.description,
                document_url: input.document_url,
            })
            .await?;
        uow.commit().await?;
        Ok(record)
    }

    pub async fn update_record(
        &self,
        caller: &Caller,
        record_id: i32,
        update: MedicalRecordUpdate,
    ) -> DomainResult<MedicalRecord> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let mut record = owned_record(&repos, caller, record_id).await?;
        record.apply(update);
        repos.pets().update_record(record.clone()).await?;
        uow.commit().await?;
        Ok(record)
    }

    pub async fn delete_record(&self, caller: &Caller, record_id: i32) -> DomainResult<()> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        owned_record(&repos, caller, record_id).await?;
        repos.pets().delete_record(record_id).await?;
        uow.commit().await
    }
}

async fn owned_pet(
    repos: &dyn RepositoryProvider,
    caller: &Caller,
    pet_id: i32,
) -> DomainResult<Pet> {
    caller.require_owner()?;
    let pet = repos
        .pets()
        .find_by_id(pet_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Pet", pet_id))?;
    caller.ensure_owns(pet.owner_id, "Pet")?;
    Ok(pet)
}

async fn owned_record(
    repos: &dyn RepositoryProvider,
    caller: &Caller,
    record_id: i32,
) -> DomainResult<MedicalRecord> {
    let record = repos
        .pets()
        .find_record(record_id)
        .await?
        .ok_or_else(|| DomainError::not_found("MedicalRecord", record_id))?;
    owned_pet(repos, caller, record.pet_id).await?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixture;
    use crate::domain::{BookingStatus, ProviderKind, ServiceDetails};

    #[tokio::test]
    async fn owner_manages_own_pet_and_records() {
        let f = fixture().await;
        let owner = f.owner("o@example.com").await;
        let caller = Caller::owner(owner.id);
        let pet = f.pet(owner.id, "Rex").await;

        let record = f
            .pets
            .add_record(
                &caller,
                pet.id,
                RecordInput {
                    record_type: RecordType::Vaccine,
                    description: "Rabies".into(),
                    document_url: None,
                },
            )
            .await
            .unwrap();

        let updated = f
            .pets
            .update_record(
                &caller,
                record.id,
                MedicalRecordUpdate {
                    description: Some("Rabies booster".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description, "Rabies booster");
        assert_eq!(updated.record_type, RecordType::Vaccine);

        let renamed = f
            .pets
            .update_pet(
                &caller,
                pet.id,
                PetUpdate {
                    name: Some("Rexy".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Rexy");

        let profile = f.pets.get_pet(&caller, pet.id).await.unwrap();
        assert_eq!(profile.medical_records.len(), 1);

        f.pets.delete_record(&caller, record.id).await.unwrap();
        let profile = f.pets.get_pet(&caller, pet.id).await.unwrap();
        assert!(profile.medical_records.is_empty());
    }

    #[tokio::test]
    async fn other_owners_are_denied() {
        let f = fixture().await;
        let a = f.owner("a@example.com").await;
        let b = f.owner("b@example.com").await;
        let pet = f.pet(a.id, "Rex").await;
        let intruder = Caller::owner(b.id);

        let err = f.pets.get_pet(&intruder, pet.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
        let err = f.pets.delete_pet(&intruder, pet.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
        assert!(f.pets.list_pets(&intruder).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_pet_is_not_found() {
        let f = fixture().await;
        let a = f.owner("a@example.com").await;
        let err = f.pets.get_pet(&Caller::owner(a.id), 404).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn pet_with_completed_booking_cannot_be_deleted() {
        let f = fixture().await;
        let service = f
            .service(
                "Trim",
                ServiceDetails::Grooming {
                    tools_required: "scissors".into(),
                    coat_type: "long".into(),
                },
            )
            .await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Fluffy").await;
        let slot = f.slot(groomer.id, 11).await;
        let booking = f.book(owner.id, pet.id, slot.id, service.id).await;

        let provider = f.users.resolve_caller(groomer.id).await.unwrap();
        f.bookings
            .advance_status(&provider, booking.booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        f.bookings
            .advance_status(&provider, booking.booking.id, BookingStatus::Completed)
            .await
            .unwrap();

        let err = f
            .pets
            .delete_pet(&Caller::owner(owner.id), pet.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        assert!(f.pets.get_pet(&Caller::owner(owner.id), pet.id).await.is_ok());
    }

    #[tokio::test]
    async fn pet_with_open_booking_is_deleted_with_it() {
        let f = fixture().await;
        let service = f
            .service(
                "Sit",
                ServiceDetails::Sitting {
                    max_pets: 1,
                    overnight_available: true,
                },
            )
            .await;
        let sitter = f.provider("s@example.com", ProviderKind::Sitter).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Tom").await;
        let slot = f.slot(sitter.id, 8).await;
        f.book(owner.id, pet.id, slot.id, service.id).await;

        f.pets
            .delete_pet(&Caller::owner(owner.id), pet.id)
            .await
            .unwrap();
        assert!(f.bookings.list_for_owner(owner.id).await.unwrap().is_empty());
    }
}
