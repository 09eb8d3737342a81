use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a pet
pub type PetId = u64;

/// An adoptable pet as delivered by the data provider.
///
/// Pets are values: nothing in the crate mutates a pet that is shared through
/// the catalog. The `favorite` flag is a projection of the favorites set and
/// is rewritten on every derivation through [`Pet::with_favorite`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Immutable identifier, unique within a catalog
    pub id: PetId,

    pub name: String,

    pub breed: String,

    #[serde(rename = "type")]
    pub pet_type: PetType,

    pub gender: Gender,

    /// Age in days
    pub age_in_days: u32,

    /// Weight in kilograms (if known)
    #[serde(default)]
    pub weight_kg: Option<f32>,

    /// Ordered image references for the carousel, never empty
    pub images: Vec<String>,

    pub location: Location,

    pub owner: PetOwner,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub characteristics: Vec<PetCharacteristic>,

    /// Denormalized favorites membership; not a source of truth
    #[serde(default)]
    pub favorite: bool,
}

/// Category of pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PetType {
    Dog,
    Cat,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetOwner {
    pub full_display_name: String,
    pub image: String,
}

/// A labelled trait of the pet ("Friendly", "Energy", ...) with its level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCharacteristic {
    pub label: String,
    pub level: Level,
}

/// Closed 1..=5 scale used by characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        match self {
            Level::VeryLow => 1,
            Level::Low => 2,
            Level::Medium => 3,
            Level::High => 4,
            Level::VeryHigh => 5,
        }
    }

    /// Fraction of the full scale, in `0.2..=1.0`
    pub fn ratio(self) -> f32 {
        f32::from(self.value()) / f32::from(Self::MAX)
    }
}

impl Pet {
    /// Returns a copy of this pet with the favorite flag set to `favorite`
    pub fn with_favorite(&self, favorite: bool) -> Pet {
        Pet {
            favorite,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Dog => write!(f, "Dog"),
            PetType::Cat => write!(f, "Cat"),
            PetType::Other => write!(f, "Other"),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ratio() {
        assert!((Level::VeryHigh.ratio() - 1.0).abs() < f32::EPSILON);
        assert!((Level::VeryLow.ratio() - 0.2).abs() < f32::EPSILON);
        assert!(Level::Low < Level::High);
    }

    #[test]
    fn test_pet_deserializes_from_provider_json() {
        let json = r#"{
            "id": 7,
            "name": "Milo",
            "breed": "Beagle",
            "type": "DOG",
            "gender": "MALE",
            "age_in_days": 420,
            "images": ["https://img/milo.jpg"],
            "location": { "address": "12 Bark St" },
            "owner": { "full_display_name": "Ana", "image": "https://img/ana.jpg" },
            "characteristics": [{ "label": "Friendly", "level": "VERY_HIGH" }]
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, 7);
        assert_eq!(pet.pet_type, PetType::Dog);
        assert_eq!(pet.weight_kg, None);
        assert!(!pet.favorite);
        assert_eq!(pet.characteristics[0].level, Level::VeryHigh);
    }
}
