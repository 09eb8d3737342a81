// src/services/derivation.rs
//
// Pure selectors behind the view model.
//
// RULES:
// - Output depends only on the arguments
// - Input pets are never modified; annotated copies are returned
// - Source order is preserved

use crate::domain::{ContentState, FavoriteSet, Pet, PetFilter, PetId, PetList};

/// Copy of `pet` whose favorite flag reflects membership in `favorites`
pub fn annotate(pet: &Pet, favorites: &FavoriteSet) -> Pet {
    pet.with_favorite(favorites.contains(pet.id))
}

/// Filtered-and-annotated list.
/// Loading and Error propagate unchanged.
pub fn derive_pet_list(
    catalog: &ContentState<PetList>,
    filter: PetFilter,
    favorites: &FavoriteSet,
) -> ContentState<PetList> {
    catalog.as_ref().map(|pets| {
        pets.iter()
            .filter(|pet| filter.matches(pet.pet_type))
            .map(|pet| annotate(pet, favorites))
            .collect()
    })
}

/// The selected pet, looked up in the derived list.
///
/// Absent when nothing is selected, when the list is not loaded, or when the
/// selected pet is not part of the current list (e.g. filtered out by type).
pub fn derive_selected_pet(
    pets: &ContentState<PetList>,
    selected: Option<PetId>,
    favorites: &FavoriteSet,
) -> Option<Pet> {
    let id = selected?;
    pets.data()?
        .iter()
        .find(|pet| pet.id == id)
        .map(|pet| annotate(pet, favorites))
}
