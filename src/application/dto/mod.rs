// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are presentation-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{ContentState, Pet, PetAge, PetCharacteristic, PetFilter, PetList};

// ============================================================================
// PET DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetDto {
    pub id: u64,
    pub name: String,
    pub breed: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub gender: String,
    pub age: String,
    pub weight: Option<String>,
    pub images: Vec<String>,
    pub location: String,
    pub owner_name: String,
    pub owner_image: String,
    pub description: String,
    pub characteristics: Vec<CharacteristicDto>,
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicDto {
    pub label: String,
    pub level: u8,
    /// Fraction of the full scale, for progress arcs
    pub ratio: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetListDto {
    pub status: String, // "loading", "success", "error"
    pub filter: String,
    pub pets: Vec<PetDto>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetTypeDto {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            pet_type: pet.pet_type.to_string(),
            gender: pet.gender.to_string(),
            age: PetAge::from_days(pet.age_in_days).short_label(),
            weight: pet.weight_kg.map(|kg| format!("{:.1} kg", kg)),
            images: pet.images.clone(),
            location: pet.location.address.clone(),
            owner_name: pet.owner.full_display_name.clone(),
            owner_image: pet.owner.image.clone(),
            description: pet.description.clone(),
            characteristics: pet.characteristics.iter().map(CharacteristicDto::from).collect(),
            favorite: pet.favorite,
        }
    }
}

impl From<Pet> for PetDto {
    fn from(pet: Pet) -> Self {
        Self::from(&pet)
    }
}

impl From<&PetCharacteristic> for CharacteristicDto {
    fn from(characteristic: &PetCharacteristic) -> Self {
        Self {
            label: characteristic.label.clone(),
            level: characteristic.level.value(),
            ratio: characteristic.level.ratio(),
        }
    }
}

impl PetListDto {
    pub fn from_state(filter: PetFilter, state: &ContentState<PetList>) -> Self {
        Self {
            status: state.status().to_string(),
            filter: filter.to_string(),
            pets: state
                .data()
                .map(|pets| pets.iter().map(PetDto::from).collect())
                .unwrap_or_default(),
            error: state.failure().map(|f| f.to_string()),
        }
    }
}

impl PetTypeDto {
    pub fn new(filter: PetFilter, current: PetFilter) -> Self {
        Self {
            value: filter.to_string(),
            label: filter.label().to_string(),
            selected: filter == current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pet::test_support::pet;
    use crate::domain::PetType;

    #[test]
    fn test_pet_dto_labels() {
        let mut p = pet(3, PetType::Cat);
        p.age_in_days = 400;
        p.weight_kg = Some(12.0);

        let dto = PetDto::from(&p);
        assert_eq!(dto.pet_type, "Cat");
        assert_eq!(dto.gender, "Female");
        assert_eq!(dto.age, "13m");
        assert_eq!(dto.weight.as_deref(), Some("12.0 kg"));
        assert_eq!(dto.characteristics[0].level, 4);
    }

    #[test]
    fn test_list_dto_from_loading() {
        let dto = PetListDto::from_state(PetFilter::Dog, &ContentState::Loading);
        assert_eq!(dto.status, "loading");
        assert_eq!(dto.filter, "dog");
        assert!(dto.pets.is_empty());
        assert!(dto.error.is_none());
    }
}
