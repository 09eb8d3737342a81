// src/services/mod.rs
//
// Services Module - state cells and the derived view model

pub mod catalog_store;
pub mod derivation;
pub mod favorites_state;
pub mod filter_state;
pub mod pets_view_model;
pub mod selection_state;
pub mod state_cell;

#[cfg(test)]
mod derivation_tests;

pub use catalog_store::PetCatalogStore;

pub use derivation::{annotate, derive_pet_list, derive_selected_pet};

pub use favorites_state::FavoritesState;
pub use filter_state::FilterState;
pub use selection_state::SelectionState;

pub use pets_view_model::{DerivedView, PetsViewModel, RecomputeStats};

pub use state_cell::{Snapshot, StateCell};
