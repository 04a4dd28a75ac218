//! Pets module: owners' pets and their medical history

pub mod service;

pub(crate) use service::remove_pet;
pub use service::{PetInput, PetService, RecordInput};
