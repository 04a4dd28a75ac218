use async_trait::async_trait;

use super::model::{MedicalRecord, NewMedicalRecord, NewPet, Pet};
use crate::domain::DomainResult;

#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn insert(&self, pet: NewPet) -> DomainResult<Pet>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pet>>;
    async fn list_for_owner(&self, owner_id: i32) -> DomainResult<Vec<Pet>>;
    async fn update(&self, pet: Pet) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn insert_record(&self, record: NewMedicalRecord) -> DomainResult<MedicalRecord>;
    async fn find_record(&self, id: i32) -> DomainResult<Option<MedicalRecord>>;
    async fn list_records(&self, pet_id: i32) -> DomainResult<Vec<MedicalRecord>>;
    async fn update_record(&self, record: MedicalRecord) -> DomainResult<()>;
    async fn delete_record(&self, id: i32) -> DomainResult<()>;
    async fn delete_records_for_pet(&self, pet_id: i32) -> DomainResult<u64>;
}
