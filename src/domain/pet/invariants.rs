use std::collections::HashSet;

use super::entity::Pet;
use crate::domain::{DomainError, DomainResult};

/// Validates all Pet invariants
/// These are the rules a record must satisfy before it enters a catalog
pub fn validate_pet(pet: &Pet) -> DomainResult<()> {
    validate_name(pet)?;
    validate_images(pet)?;
    validate_weight(pet)?;
    validate_characteristics(pet)?;
    Ok(())
}

/// Validates every pet and the uniqueness of identifiers across the list
pub fn validate_catalog(pets: &[Pet]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(pets.len());
    for pet in pets {
        validate_pet(pet)?;
        if !seen.insert(pet.id) {
            return Err(DomainError::DuplicatePetId(pet.id));
        }
    }
    Ok(())
}

fn validate_name(pet: &Pet) -> DomainResult<()> {
    if pet.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Pet {} has an empty name",
            pet.id
        )));
    }
    Ok(())
}

/// The detail carousel needs at least one image
fn validate_images(pet: &Pet) -> DomainResult<()> {
    if pet.images.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Pet {} has no images",
            pet.id
        )));
    }
    Ok(())
}

fn validate_weight(pet: &Pet) -> DomainResult<()> {
    if let Some(weight) = pet.weight_kg {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DomainError::InvariantViolation(format!(
                "Pet {} has invalid weight {}",
                pet.id, weight
            )));
        }
    }
    Ok(())
}

fn validate_characteristics(pet: &Pet) -> DomainResult<()> {
    if pet.characteristics.iter().any(|c| c.label.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Pet {} has a characteristic without label",
            pet.id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Pet domain:
///
/// 1. Identity is immutable and unique within a catalog
/// 2. Name cannot be empty
/// 3. At least one image
/// 4. Weight, when known, is a positive number
/// 5. The favorite flag carries no meaning on a raw record

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pet::test_support::pet;
    use crate::domain::pet::{PetCharacteristic, PetType, Level};

    #[test]
    fn test_valid_pet() {
        assert!(validate_pet(&pet(1, PetType::Dog)).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut p = pet(1, PetType::Dog);
        p.name = "  ".to_string();
        assert!(validate_pet(&p).is_err());
    }

    #[test]
    fn test_missing_images_fails() {
        let mut p = pet(1, PetType::Cat);
        p.images.clear();
        assert!(validate_pet(&p).is_err());
    }

    #[test]
    fn test_non_positive_weight_fails() {
        let mut p = pet(1, PetType::Cat);
        p.weight_kg = Some(0.0);
        assert!(validate_pet(&p).is_err());

        p.weight_kg = Some(f32::NAN);
        assert!(validate_pet(&p).is_err());

        p.weight_kg = None;
        assert!(validate_pet(&p).is_ok());
    }

    #[test]
    fn test_blank_characteristic_label_fails() {
        let mut p = pet(1, PetType::Other);
        p.characteristics.push(PetCharacteristic {
            label: String::new(),
            level: Level::Low,
        });
        assert!(validate_pet(&p).is_err());
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let pets = vec![pet(1, PetType::Dog), pet(2, PetType::Cat), pet(1, PetType::Cat)];
        match validate_catalog(&pets) {
            Err(DomainError::DuplicatePetId(id)) => assert_eq!(id, 1),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }
}
