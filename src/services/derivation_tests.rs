// src/services/derivation_tests.rs
//
// Properties of the pure selectors:
// - Output depends only on (list, filter, favorites)
// - The wildcard filter is the identity on content and order
// - A concrete filter keeps only its type, in source order
// - Favorite flags always equal set membership, whatever the input flag was
// - Selection finds pets in the derived list only

#[cfg(test)]
mod selector_tests {
    use crate::domain::pet::test_support::pet;
    use crate::domain::{ContentState, FavoriteSet, LoadFailure, Pet, PetFilter, PetList, PetType};
    use crate::error::AppError;
    use crate::services::derivation::{derive_pet_list, derive_selected_pet};

    fn mixed_catalog() -> PetList {
        vec![
            pet(1, PetType::Dog),
            pet(2, PetType::Cat),
            pet(3, PetType::Other).with_favorite(true),
            pet(4, PetType::Dog).with_favorite(true),
            pet(5, PetType::Cat),
            pet(6, PetType::Dog),
        ]
        .into()
    }

    fn ids(state: &ContentState<PetList>) -> Vec<u64> {
        state.data().unwrap().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let catalog = ContentState::Success(mixed_catalog());
        let favorites: FavoriteSet = [2, 6].into_iter().collect();

        for filter in PetFilter::ALL {
            let first = derive_pet_list(&catalog, filter, &favorites);
            for _ in 0..10 {
                let again = derive_pet_list(&catalog, filter, &favorites);
                assert_eq!(first.data().unwrap(), again.data().unwrap());
            }
        }
    }

    #[test]
    fn test_wildcard_is_identity_on_content_and_order() {
        let source = mixed_catalog();
        let catalog = ContentState::Success(source.clone());
        let favorites = FavoriteSet::new();

        let derived = derive_pet_list(&catalog, PetFilter::Unfiltered, &favorites);
        let pets = derived.data().unwrap();

        assert_eq!(pets.len(), source.len());
        for (out, input) in pets.iter().zip(source.iter()) {
            assert_eq!(out.id, input.id);
            assert_eq!(out.with_favorite(false), input.with_favorite(false));
            assert!(!out.favorite);
        }
    }

    #[test]
    fn test_concrete_filter_keeps_type_and_order() {
        let catalog = ContentState::Success(mixed_catalog());
        let favorites = FavoriteSet::new();

        let dogs = derive_pet_list(&catalog, PetFilter::Dog, &favorites);
        assert_eq!(ids(&dogs), vec![1, 4, 6]);
        assert!(dogs.data().unwrap().iter().all(|p| p.pet_type == PetType::Dog));

        let cats = derive_pet_list(&catalog, PetFilter::Cat, &favorites);
        assert_eq!(ids(&cats), vec![2, 5]);
    }

    #[test]
    fn test_favorite_flag_equals_membership() {
        let catalog = ContentState::Success(mixed_catalog());
        let favorites: FavoriteSet = [1, 3].into_iter().collect();

        let derived = derive_pet_list(&catalog, PetFilter::Unfiltered, &favorites);
        for p in derived.data().unwrap().iter() {
            assert_eq!(p.favorite, favorites.contains(p.id), "pet {}", p.id);
        }
    }

    #[test]
    fn test_source_pets_are_not_modified() {
        let source = mixed_catalog();
        let catalog = ContentState::Success(source.clone());
        let favorites: FavoriteSet = [1, 2, 5].into_iter().collect();

        let _ = derive_pet_list(&catalog, PetFilter::Unfiltered, &favorites);

        let flags: Vec<bool> = source.iter().map(|p| p.favorite).collect();
        assert_eq!(flags, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn test_loading_and_error_propagate() {
        let favorites = FavoriteSet::new();

        let loading: ContentState<PetList> = ContentState::Loading;
        assert!(derive_pet_list(&loading, PetFilter::Dog, &favorites).is_loading());

        let error: ContentState<PetList> =
            ContentState::Error(LoadFailure::new(AppError::CatalogLoad("timeout".into())));
        let derived = derive_pet_list(&error, PetFilter::Dog, &favorites);
        assert!(derived.failure().unwrap().to_string().contains("timeout"));
    }

    #[test]
    fn test_empty_filter_result_is_success() {
        let catalog: ContentState<PetList> = ContentState::Success(vec![pet(1, PetType::Cat)].into());
        let derived = derive_pet_list(&catalog, PetFilter::Dog, &FavoriteSet::new());
        assert!(derived.data().unwrap().is_empty());
    }

    #[test]
    fn test_selection_refreshes_flag() {
        let favorites: FavoriteSet = [2].into_iter().collect();
        // List annotated before the toggle: pet 2 still unflagged
        let stale_list: PetList = vec![pet(1, PetType::Dog), pet(2, PetType::Cat)].into();
        let pets = ContentState::Success(stale_list);

        let selected: Pet = derive_selected_pet(&pets, Some(2), &favorites).unwrap();
        assert_eq!(selected.id, 2);
        assert!(selected.favorite);

        let other = derive_selected_pet(&pets, Some(1), &favorites).unwrap();
        assert!(!other.favorite);
    }

    #[test]
    fn test_selection_absent_cases() {
        let favorites = FavoriteSet::new();
        let pets: ContentState<PetList> = ContentState::Success(vec![pet(1, PetType::Dog)].into());

        assert!(derive_selected_pet(&pets, None, &favorites).is_none());
        assert!(derive_selected_pet(&pets, Some(9), &favorites).is_none());
        assert!(derive_selected_pet(&ContentState::Loading, Some(1), &favorites).is_none());
    }
}
