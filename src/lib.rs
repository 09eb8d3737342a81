// src/lib.rs
// Petshelf - reactive state core for browsing adoptable pets
//
// Architecture:
// - Domain-centric: pets, filters and favorites are plain values with invariants
// - Event-driven: state cells publish changes on a typed event bus
// - Derived: the visible list and the selected pet are pure functions of the inputs
// - Application Layer: commands and DTOs for the presentation boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod providers;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_catalog,
    validate_pet,
    // Load lifecycle
    ContentState,
    DomainError,
    DomainResult,
    // Browsing inputs
    FavoriteSet,
    Gender,
    Level,
    LoadFailure,
    Location,
    // Pet
    Pet,
    PetAge,
    PetCharacteristic,
    PetFilter,
    PetId,
    PetList,
    PetOwner,
    PetType,
};

// ============================================================================
// PUBLIC API - Errors and Configuration
// ============================================================================

pub use config::{AppConfig, CatalogConfig};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    // Input cells
    CatalogStateChanged,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteToggled,
    FilterChanged,
    // Derived outputs
    PetListUpdated,
    PetSelected,
    SelectedPetUpdated,
};

// ============================================================================
// PUBLIC API - Providers
// ============================================================================

pub use providers::{FailingPetProvider, JsonFilePetProvider, PetDataProvider, StaticPetProvider};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    derive_pet_list,
    derive_selected_pet,
    DerivedView,
    FavoritesState,
    FilterState,
    PetCatalogStore,
    PetsViewModel,
    RecomputeStats,
    SelectionState,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
