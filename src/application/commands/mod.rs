// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI and the view model
// - Commands return DTOs
// - Commands serialize errors as ErrorResponse JSON
// - Commands NEVER contain business logic

pub mod pet_commands;

pub use pet_commands::*;
