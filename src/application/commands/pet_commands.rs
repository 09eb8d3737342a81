// src/application/commands/pet_commands.rs
//
// Pet Command Handlers
//
// RULES:
// - Accept plain inputs
// - Call the view model
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{PetFilter, PetId};
use crate::error::{AppError, AppResult};

/// Current filtered, favorite-annotated list
pub fn list_pets(state: &AppState) -> PetListDto {
    let view = state.view_model.refresh();
    PetListDto::from_state(view.filter, &view.pets)
}

/// Pet shown in the detail view, if any
pub fn get_selected_pet(state: &AppState) -> Option<PetDto> {
    state.view_model.selected_pet().map(PetDto::from)
}

/// Supported filters, with the current one marked
pub fn list_pet_types(state: &AppState) -> Vec<PetTypeDto> {
    let current = state.view_model.current_filter();
    state
        .view_model
        .pet_types()
        .iter()
        .map(|filter| PetTypeDto::new(*filter, current))
        .collect()
}

pub fn list_favorites(state: &AppState) -> Vec<PetId> {
    state.view_model.favorite_ids()
}

/// Change the type filter; accepts "dog", "cat" or "all"
pub fn set_filter(filter: &str, state: &AppState) -> Result<PetListDto, String> {
    let filter: PetFilter = filter
        .parse()
        .map_err(|e: String| ErrorResponse::validation(e).to_json())?;

    state.view_model.set_filter(filter);
    Ok(list_pets(state))
}

/// Navigate into a pet's detail view
pub fn select_pet(pet_id: PetId, state: &AppState) -> Option<PetDto> {
    state.view_model.select_pet(pet_id);
    get_selected_pet(state)
}

/// Toggle a pet from the current list in or out of favorites
pub fn toggle_favorite(pet_id: PetId, state: &AppState) -> Result<PetDto, String> {
    toggle_listed_favorite(pet_id, state).to_error_response()
}

fn toggle_listed_favorite(pet_id: PetId, state: &AppState) -> AppResult<PetDto> {
    let pets = state.view_model.pets();
    let pet = pets
        .data()
        .and_then(|pets| pets.iter().find(|p| p.id == pet_id))
        .ok_or(AppError::NotFound)?;

    let favorite = state.view_model.toggle_favorite(pet);
    Ok(PetDto::from(pet.with_favorite(favorite)))
}
