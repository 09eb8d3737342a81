// src/main.rs
//
// Line-oriented browser over the pet state core. Reads commands from stdin
// and prints the resulting DTOs as JSON on stdout; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use petshelf::application::commands::*;
use petshelf::application::state::AppState;
use petshelf::config::AppConfig;
use petshelf::events::{PetListUpdated, SelectedPetUpdated};
use petshelf::providers::{JsonFilePetProvider, PetDataProvider, StaticPetProvider};

const HELP: &str = "commands: list | filter <dog|cat|all> | types | fav <id> | select <id> | show | favorites | help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let env_filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 1. PROVIDER
    let provider: Arc<dyn PetDataProvider> = match &config.catalog_path {
        Some(path) => Arc::new(JsonFilePetProvider::new(path.clone())),
        None => Arc::new(StaticPetProvider::sample()),
    };

    // 2. STATE
    let state = AppState::new(provider, config.catalog());

    // 3. SUBSCRIPTIONS (the first one starts the catalog load)
    state.view_model.subscribe_pets(|event: &PetListUpdated| {
        log::info!(
            "Pet list {} for filter {} ({} pets)",
            event.state.status(),
            event.filter,
            event.state.data().map(|p| p.len()).unwrap_or(0)
        );
    })?;
    state
        .view_model
        .subscribe_selected_pet(|event: &SelectedPetUpdated| match &event.pet {
            Some(pet) => log::info!("Showing {} (#{})", pet.name, pet.id),
            None => log::debug!("No pet selected"),
        });

    let loaded = state.catalog.wait_loaded().await;
    log::info!("Catalog ready: {}", loaded.status());

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.next();

        let output = match (command, argument) {
            ("list", _) => to_json(&list_pets(&state))?,
            ("types", _) => to_json(&list_pet_types(&state))?,
            ("filter", Some(filter)) => match set_filter(filter, &state) {
                Ok(list) => to_json(&list)?,
                Err(e) => e,
            },
            ("fav", Some(id)) => match parse_id(id) {
                Ok(id) => match toggle_favorite(id, &state) {
                    Ok(pet) => to_json(&pet)?,
                    Err(e) => e,
                },
                Err(e) => e,
            },
            ("select", Some(id)) => match parse_id(id) {
                Ok(id) => to_json(&select_pet(id, &state))?,
                Err(e) => e,
            },
            ("show", _) => to_json(&get_selected_pet(&state))?,
            ("favorites", _) => to_json(&list_favorites(&state))?,
            ("quit", _) | ("exit", _) => break,
            _ => HELP.to_string(),
        };

        println!("{}", output);
    }

    state.catalog.cancel();
    Ok(())
}

fn parse_id(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>().map_err(|e| {
        petshelf::application::ErrorResponse::validation(format!("invalid pet id '{}': {}", raw, e))
            .to_json()
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize response")
}
