// src/providers/mod.rs
//
// Data providers - where the catalog comes from

pub mod json_provider;
pub mod pet_provider;
pub mod sample;

pub use json_provider::JsonFilePetProvider;
pub use pet_provider::{FailingPetProvider, PetDataProvider, StaticPetProvider};

#[cfg(test)]
pub use pet_provider::MockPetDataProvider;
