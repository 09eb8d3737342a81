// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the state cells and the view model
// - Provides the boundary between the presentation layer and the services
// - Translates domain values into DTOs

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
