// events/types.rs
//
// All events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ContentState, Pet, PetFilter, PetId, PetList};

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// INPUT EVENTS (state cells changed)
// ============================================================================

/// Emitted on every catalog state transition (including the initial Loading)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStateChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub status: String, // "loading", "success", "error"
    pub pet_count: Option<usize>,
}

impl CatalogStateChanged {
    pub fn new(status: &str, pet_count: Option<usize>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            status: status.to_string(),
            pet_count,
        }
    }
}

impl DomainEvent for CatalogStateChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogStateChanged" }
}

/// Emitted whenever the filter setter is called, even with the current value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub previous: PetFilter,
    pub current: PetFilter,
}

impl FilterChanged {
    pub fn new(previous: PetFilter, current: PetFilter) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            previous,
            current,
        }
    }
}

impl DomainEvent for FilterChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilterChanged" }
}

/// Emitted when a pet enters or leaves the favorites set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet_id: PetId,
    pub favorite: bool,
}

impl FavoriteToggled {
    pub fn new(pet_id: PetId, favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet_id,
            favorite,
        }
    }
}

impl DomainEvent for FavoriteToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteToggled" }
}

/// Emitted when the user navigates into a pet's detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSelected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet_id: PetId,
}

impl PetSelected {
    pub fn new(pet_id: PetId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet_id,
        }
    }
}

impl DomainEvent for PetSelected {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PetSelected" }
}

// ============================================================================
// OUTPUT EVENTS (derived values published to the presentation layer)
// ============================================================================

/// Emitted when the filtered, favorite-annotated list is recomputed
#[derive(Debug, Clone)]
pub struct PetListUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub filter: PetFilter,
    pub state: ContentState<PetList>,
}

impl PetListUpdated {
    pub fn new(filter: PetFilter, state: ContentState<PetList>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            filter,
            state,
        }
    }
}

impl DomainEvent for PetListUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PetListUpdated" }
}

/// Emitted when the selected pet is recomputed; `pet` is None for an absent selection
#[derive(Debug, Clone)]
pub struct SelectedPetUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet: Option<Pet>,
}

impl SelectedPetUpdated {
    pub fn new(pet: Option<Pet>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet,
        }
    }
}

impl DomainEvent for SelectedPetUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SelectedPetUpdated" }
}
