use std::sync::Arc;

pub mod age;
pub mod entity;
pub mod invariants;

pub use age::PetAge;
pub use entity::{Gender, Level, Location, Pet, PetCharacteristic, PetId, PetOwner, PetType};
pub use invariants::{validate_catalog, validate_pet};

/// Shared, immutable list of pets as held by the catalog and derived outputs
pub type PetList = Arc<[Pet]>;
