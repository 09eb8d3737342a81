// src/services/favorites_state.rs
use std::sync::Arc;

use super::state_cell::{Snapshot, StateCell};
use crate::domain::{FavoriteSet, Pet, PetId};
use crate::events::{EventBus, FavoriteToggled};

/// Favorites set holder.
///
/// Toggling only touches the set: it never reads or writes the `favorite`
/// flag of a pet, and never changes the filter or the selection.
pub struct FavoritesState {
    cell: StateCell<FavoriteSet>,
    event_bus: Arc<EventBus>,
}

impl FavoritesState {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            cell: StateCell::new(FavoriteSet::new()),
            event_bus,
        }
    }

    pub fn snapshot(&self) -> Snapshot<FavoriteSet> {
        self.cell.snapshot()
    }

    pub fn is_favorite(&self, id: PetId) -> bool {
        self.cell.get().contains(id)
    }

    pub fn favorite_ids(&self) -> Vec<PetId> {
        self.cell.get().sorted_ids()
    }

    /// Returns whether the pet is a favorite after the toggle
    pub fn toggle(&self, pet: &Pet) -> bool {
        self.toggle_id(pet.id)
    }

    pub fn toggle_id(&self, id: PetId) -> bool {
        let favorite = self.cell.update(|set| set.toggle(id));
        log::info!(
            "Pet {} {} favorites",
            id,
            if favorite { "added to" } else { "removed from" }
        );
        self.event_bus.emit(FavoriteToggled::new(id, favorite));
        favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pet::test_support::pet;
    use crate::domain::PetType;

    #[test]
    fn test_toggle_ignores_stale_flag_on_pet() {
        let state = FavoritesState::new(Arc::new(EventBus::new()));

        // A raw record claiming to be favorite is still added on first toggle
        let stale = pet(1, PetType::Dog).with_favorite(true);
        assert!(state.toggle(&stale));
        assert!(state.is_favorite(1));

        assert!(!state.toggle(&stale));
        assert!(!state.is_favorite(1));
    }

    #[test]
    fn test_toggle_round_trip_and_events() {
        let bus = Arc::new(EventBus::new());
        let state = FavoritesState::new(Arc::clone(&bus));

        state.toggle_id(4);
        state.toggle_id(2);
        assert_eq!(state.favorite_ids(), vec![2, 4]);

        state.toggle_id(4);
        assert_eq!(state.favorite_ids(), vec![2]);
        assert_eq!(state.snapshot().version, 3);

        let log = bus.get_event_log();
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|e| e.event_type == "FavoriteToggled"));
    }
}
