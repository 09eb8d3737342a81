// src/providers/sample.rs
//
// Built-in catalog shipped with the binary

use crate::domain::{
    Gender, Level, Location, Pet, PetCharacteristic, PetId, PetOwner, PetType,
};

pub fn sample_pets() -> Vec<Pet> {
    vec![
        pet(
            1,
            "Bella",
            "Labrador Retriever",
            PetType::Dog,
            Gender::Female,
            540,
            Some(24.5),
            "14 Harbor Lane, Portland",
            "Maya Chen",
            &[("Friendly", Level::VeryHigh), ("Energy", Level::High)],
        ),
        pet(
            2,
            "Oliver",
            "British Shorthair",
            PetType::Cat,
            Gender::Male,
            210,
            Some(4.2),
            "3 Elm Street, Salem",
            "Jonas Weber",
            &[("Calm", Level::High), ("Playful", Level::Medium)],
        ),
        pet(
            3,
            "Rocky",
            "Border Collie",
            PetType::Dog,
            Gender::Male,
            60,
            None,
            "88 Ridge Road, Bend",
            "Sam Ortiz",
            &[("Energy", Level::VeryHigh), ("Trainable", Level::High)],
        ),
        pet(
            4,
            "Luna",
            "Maine Coon",
            PetType::Cat,
            Gender::Female,
            1200,
            Some(6.8),
            "27 Cedar Court, Eugene",
            "Maya Chen",
            &[("Friendly", Level::High), ("Independent", Level::Medium)],
        ),
        pet(
            5,
            "Pip",
            "Holland Lop",
            PetType::Other,
            Gender::Male,
            12,
            Some(0.5),
            "5 Meadow Way, Corvallis",
            "Riley Park",
            &[("Shy", Level::Low)],
        ),
        pet(
            6,
            "Daisy",
            "Beagle",
            PetType::Dog,
            Gender::Female,
            2400,
            Some(11.0),
            "61 Pine Avenue, Portland",
            "Jonas Weber",
            &[("Friendly", Level::VeryHigh), ("Energy", Level::Low)],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn pet(
    id: PetId,
    name: &str,
    breed: &str,
    pet_type: PetType,
    gender: Gender,
    age_in_days: u32,
    weight_kg: Option<f32>,
    address: &str,
    owner: &str,
    characteristics: &[(&str, Level)],
) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        breed: breed.to_string(),
        pet_type,
        gender,
        age_in_days,
        weight_kg,
        images: (1..=3)
            .map(|n| format!("https://images.petshelf.dev/{}/{}.jpg", id, n))
            .collect(),
        location: Location {
            address: address.to_string(),
        },
        owner: PetOwner {
            full_display_name: owner.to_string(),
            image: format!(
                "https://images.petshelf.dev/owners/{}.jpg",
                owner.to_lowercase().replace(' ', "-")
            ),
        },
        description: format!("{} is a {} looking for a home.", name, breed.to_lowercase()),
        characteristics: characteristics
            .iter()
            .map(|(label, level)| PetCharacteristic {
                label: label.to_string(),
                level: *level,
            })
            .collect(),
        favorite: false,
    }
}
