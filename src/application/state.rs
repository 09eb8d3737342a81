// src/application/state.rs

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::events::EventBus;
use crate::providers::PetDataProvider;
use crate::services::{
    FavoritesState, FilterState, PetCatalogStore, PetsViewModel, SelectionState,
};

/// Application state handed to the presentation layer.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<PetCatalogStore>,
    pub filter: Arc<FilterState>,
    pub favorites: Arc<FavoritesState>,
    pub selection: Arc<SelectionState>,
    pub view_model: Arc<PetsViewModel>,
}

impl AppState {
    /// Wires the state cells and the view model around one event bus
    pub fn new(provider: Arc<dyn PetDataProvider>, config: CatalogConfig) -> Self {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());

        // 2. STATE CELLS
        let catalog = Arc::new(PetCatalogStore::new(provider, Arc::clone(&event_bus), config));
        let filter = Arc::new(FilterState::new(Arc::clone(&event_bus)));
        let favorites = Arc::new(FavoritesState::new(Arc::clone(&event_bus)));
        let selection = Arc::new(SelectionState::new(Arc::clone(&event_bus)));

        // 3. DERIVED VIEW MODEL (registers its event handlers)
        let view_model = PetsViewModel::new(
            Arc::clone(&catalog),
            Arc::clone(&filter),
            Arc::clone(&favorites),
            Arc::clone(&selection),
            Arc::clone(&event_bus),
        );

        Self {
            event_bus,
            catalog,
            filter,
            favorites,
            selection,
            view_model,
        }
    }
}
