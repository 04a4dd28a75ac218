//! Pet aggregate
//!
//! Pets and their medical records, owned exclusively by one owner.

pub mod model;
pub mod repository;

pub use model::{
    AnimalType, MedicalRecord, MedicalRecordUpdate, NewMedicalRecord, NewPet, Pet, PetProfile,
    PetUpdate, RecordType,
};
pub use repository::PetRepository;
