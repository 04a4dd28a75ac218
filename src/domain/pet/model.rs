//! Pet and medical record entities

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::support::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Dog,
    Cat,
}

impl AnimalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl FromStr for AnimalType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            other => Err(DomainError::Validation(format!(
                "Unknown animal type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Vaccine,
    Diagnosis,
    Allergy,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vaccine => "vaccine",
            Self::Diagnosis => "diagnosis",
            Self::Allergy => "allergy",
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vaccine" => Ok(Self::Vaccine),
            "diagnosis" => Ok(Self::Diagnosis),
            "allergy" => Ok(Self::Allergy),
            other => Err(DomainError::Validation(format!(
                "Unknown record type: {}",
                other
            ))),
        }
    }
}

/// A pet, owned by exactly one owner
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub animal_type: AnimalType,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPet {
    pub owner_id: i32,
    pub name: String,
    pub animal_type: AnimalType,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

/// Owner-editable pet fields. The animal type is fixed at registration.
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub medical_notes: Option<String>,
}

impl Pet {
    pub fn apply(&mut self, update: PetUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.breed.is_some() {
            self.breed = update.breed;
        }
        if update.birth_date.is_some() {
            self.birth_date = update.birth_date;
        }
        if update.medical_notes.is_some() {
            self.medical_notes = update.medical_notes;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRecord {
    pub id: i32,
    pub pet_id: i32,
    pub record_type: RecordType,
    pub description: String,
    pub date: DateTime<Utc>,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMedicalRecord {
    pub pet_id: i32,
    pub record_type: RecordType,
    pub description: String,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MedicalRecordUpdate {
    pub record_type: Option<RecordType>,
    pub description: Option<String>,
    pub document_url: Option<String>,
}

impl MedicalRecord {
    pub fn apply(&mut self, update: MedicalRecordUpdate) {
        if let Some(record_type) = update.record_type {
            self.record_type = record_type;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if update.document_url.is_some() {
            self.document_url = update.document_url;
        }
    }
}

/// Pet with its medical history
#[derive(Debug, Clone)]
pub struct PetProfile {
    pub pet: Pet,
    pub medical_records: Vec<MedicalRecord>,
}
