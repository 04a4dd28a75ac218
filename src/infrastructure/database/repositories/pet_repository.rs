//! SeaORM implementation of PetRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::pet::{MedicalRecord, NewMedicalRecord, NewPet, Pet, PetRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{medical_record, pet};

pub struct SeaOrmPetRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmPetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn pet_to_domain(m: pet::Model) -> Pet {
    Pet {
        id: m.id,
        owner_id: m.owner_id,
        name: m.name,
        animal_type: m.animal_type.into(),
        breed: m.breed,
        birth_date: m.birth_date,
        medical_notes: m.medical_notes,
    }
}

fn record_to_domain(m: medical_record::Model) -> MedicalRecord {
    MedicalRecord {
        id: m.id,
        pet_id: m.pet_id,
        record_type: m.record_type.into(),
        description: m.description,
        date: m.date,
        document_url: m.document_url,
    }
}

// ── PetRepository impl ──────────────────────────────────────────

#[async_trait]
impl<'a, C> PetRepository for SeaOrmPetRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, p: NewPet) -> DomainResult<Pet> {
        debug!("Inserting pet '{}' for owner {}", p.name, p.owner_id);

        let model = pet::ActiveModel {
            id: NotSet,
            owner_id: Set(p.owner_id),
            name: Set(p.name),
            animal_type: Set(p.animal_type.into()),
            breed: Set(p.breed),
            birth_date: Set(p.birth_date),
            medical_notes: Set(p.medical_notes),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(pet_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pet>> {
        let model = pet::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(pet_to_domain))
    }

    async fn list_for_owner(&self, owner_id: i32) -> DomainResult<Vec<Pet>> {
        let models = pet::Entity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(pet::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(pet_to_domain).collect())
    }

    async fn update(&self, p: Pet) -> DomainResult<()> {
        debug!("Updating pet: {}", p.id);

        let model = pet::ActiveModel {
            id: Set(p.id),
            owner_id: Set(p.owner_id),
            name: Set(p.name),
            animal_type: Set(p.animal_type.into()),
            breed: Set(p.breed),
            birth_date: Set(p.birth_date),
            medical_notes: Set(p.medical_notes),
        };
        model.update(self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting pet: {}", id);

        let result = pet::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Pet", id));
        }
        Ok(())
    }

    async fn insert_record(&self, r: NewMedicalRecord) -> DomainResult<MedicalRecord> {
        debug!("Inserting {} record for pet {}", r.record_type.as_str(), r.pet_id);

        let model = medical_record::ActiveModel {
            id: NotSet,
            pet_id: Set(r.pet_id),
            record_type: Set(r.record_type.into()),
            description: Set(r.description),
            date: Set(Utc::now()),
            document_url: Set(r.document_url),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(record_to_domain(saved))
    }

    async fn find_record(&self, id: i32) -> DomainResult<Option<MedicalRecord>> {
        let model = medical_record::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(record_to_domain))
    }

    async fn list_records(&self, pet_id: i32) -> DomainResult<Vec<MedicalRecord>> {
        let models = medical_record::Entity::find()
            .filter(medical_record::Column::PetId.eq(pet_id))
            .order_by_desc(medical_record::Column::Date)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(record_to_domain).collect())
    }

    async fn update_record(&self, r: MedicalRecord) -> DomainResult<()> {
        debug!("Updating medical record: {}", r.id);

        let model = medical_record::ActiveModel {
            id: Set(r.id),
            pet_id: Set(r.pet_id),
            record_type: Set(r.record_type.into()),
            description: Set(r.description),
            date: Set(r.date),
            document_url: Set(r.document_url),
        };
        model.update(self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete_record(&self, id: i32) -> DomainResult<()> {
        let result = medical_record::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("MedicalRecord", id));
        }
        Ok(())
    }

    async fn delete_records_for_pet(&self, pet_id: i32) -> DomainResult<u64> {
        let result = medical_record::Entity::delete_many()
            .filter(medical_record::Column::PetId.eq(pet_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
