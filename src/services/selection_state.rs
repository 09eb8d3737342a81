// src/services/selection_state.rs
use std::sync::Arc;

use super::state_cell::{Snapshot, StateCell};
use crate::domain::PetId;
use crate::events::{EventBus, PetSelected};

/// Identifier of the pet shown in the detail view.
/// Set on navigation-in; navigating out leaves it in place.
pub struct SelectionState {
    cell: StateCell<Option<PetId>>,
    event_bus: Arc<EventBus>,
}

impl SelectionState {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            cell: StateCell::new(None),
            event_bus,
        }
    }

    pub fn selected(&self) -> Option<PetId> {
        self.cell.get()
    }

    pub fn snapshot(&self) -> Snapshot<Option<PetId>> {
        self.cell.snapshot()
    }

    pub fn select(&self, id: PetId) {
        self.cell.replace(Some(id));
        log::debug!("Selected pet {}", id);
        self.event_bus.emit(PetSelected::new(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        let state = SelectionState::new(Arc::new(EventBus::new()));
        assert_eq!(state.selected(), None);

        state.select(8);
        state.select(3);
        assert_eq!(state.selected(), Some(3));
        assert_eq!(state.snapshot().version, 2);
    }
}
