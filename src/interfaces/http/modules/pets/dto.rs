//! Pet & medical record DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::pet::{MedicalRecordUpdate, PetUpdate};
use crate::domain::{MedicalRecord, Pet, PetProfile};

#[derive(Debug, Serialize, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    /// `dog` or `cat`
    pub animal_type: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

impl From<Pet> for PetDto {
    fn from(p: Pet) -> Self {
        Self {
            id: p.id,
            owner_id: p.owner_id,
            name: p.name,
            animal_type: p.animal_type.as_str().to_string(),
            breed: p.breed,
            birth_date: p.birth_date,
            medical_notes: p.medical_notes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MedicalRecordDto {
    pub id: i32,
    pub pet_id: i32,
    /// `vaccine`, `diagnosis` or `allergy`
    pub record_type: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub document_url: Option<String>,
}

impl From<MedicalRecord> for MedicalRecordDto {
    fn from(r: MedicalRecord) -> Self {
        Self {
            id: r.id,
            pet_id: r.pet_id,
            record_type: r.record_type.as_str().to_string(),
            description: r.description,
            date: r.date,
            document_url: r.document_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PetProfileDto {
    pub pet: PetDto,
    pub medical_records: Vec<MedicalRecordDto>,
}

impl From<PetProfile> for PetProfileDto {
    fn from(p: PetProfile) -> Self {
        Self {
            pet: p.pet.into(),
            medical_records: p.medical_records.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePetRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[schema(example = "dog")]
    pub animal_type: String,
    #[validate(length(max = 100))]
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 100, message = "name cannot be blank"))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

impl From<UpdatePetRequest> for PetUpdate {
    fn from(r: UpdatePetRequest) -> Self {
        Self {
            name: r.name,
            breed: r.breed,
            birth_date: r.birth_date,
            medical_notes: r.medical_notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMedicalRecordRequest {
    #[schema(example = "vaccine")]
    pub record_type: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(max = 500))]
    pub document_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMedicalRecordRequest {
    pub record_type: Option<String>,
    #[validate(length(min = 1, message = "description cannot be blank"))]
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub document_url: Option<String>,
}

impl UpdateMedicalRecordRequest {
    pub fn into_update(self) -> crate::domain::DomainResult<MedicalRecordUpdate> {
        Ok(MedicalRecordUpdate {
            record_type: self.record_type.as_deref().map(str::parse).transpose()?,
            description: self.description,
            document_url: self.document_url,
        })
    }
}
