// src/services/filter_state.rs
use std::sync::Arc;

use super::state_cell::{Snapshot, StateCell};
use crate::domain::PetFilter;
use crate::events::{EventBus, FilterChanged};

/// Currently selected pet-type filter. Starts at [`PetFilter::DEFAULT`].
pub struct FilterState {
    cell: StateCell<PetFilter>,
    event_bus: Arc<EventBus>,
}

impl FilterState {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            cell: StateCell::new(PetFilter::DEFAULT),
            event_bus,
        }
    }

    pub fn current(&self) -> PetFilter {
        self.cell.get()
    }

    pub fn snapshot(&self) -> Snapshot<PetFilter> {
        self.cell.snapshot()
    }

    /// Setting the current value again still publishes; derived state memoizes on the value
    pub fn set(&self, filter: PetFilter) {
        let previous = self.cell.replace(filter);
        log::info!("Filter {} -> {}", previous, filter);
        self.event_bus.emit(FilterChanged::new(previous, filter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_starts_at_default() {
        let state = FilterState::new(Arc::new(EventBus::new()));
        assert_eq!(state.current(), PetFilter::Dog);
    }

    #[test]
    fn test_set_publishes_previous_and_current() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<FilterChanged, _>(move |e| {
            seen_clone.lock().unwrap().push((e.previous, e.current));
        });

        let state = FilterState::new(Arc::clone(&bus));
        state.set(PetFilter::Cat);
        state.set(PetFilter::Cat);

        assert_eq!(state.current(), PetFilter::Cat);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (PetFilter::Dog, PetFilter::Cat),
                (PetFilter::Cat, PetFilter::Cat)
            ]
        );
    }
}
