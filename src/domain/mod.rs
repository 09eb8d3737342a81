// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod content_state;
pub mod favorites;
pub mod filter;
pub mod pet;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Pet Domain
pub use pet::{
    validate_catalog, validate_pet, Gender, Level, Location, Pet, PetAge, PetCharacteristic,
    PetId, PetList, PetOwner, PetType,
};

// Load lifecycle
pub use content_state::{ContentState, LoadFailure};

// Browsing inputs
pub use favorites::FavoriteSet;
pub use filter::PetFilter;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of catalog invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate pet id {0} in catalog")]
    DuplicatePetId(PetId),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
