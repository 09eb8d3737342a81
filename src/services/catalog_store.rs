// src/services/catalog_store.rs
//
// Pet Catalog Store - single-shot background load of the full pet list
//
// CRITICAL RULES:
// - Starts in Loading, resolves exactly once to Success or Error
// - Never re-fetches; there is no retry transition
// - The load runs as a background task and can be cancelled
// - A cancelled load leaves the store in Loading

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::state_cell::{Snapshot, StateCell};
use crate::config::CatalogConfig;
use crate::domain::{validate_catalog, ContentState, LoadFailure, Pet, PetList};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogStateChanged, EventBus};
use crate::providers::PetDataProvider;

pub struct PetCatalogStore {
    provider: Arc<dyn PetDataProvider>,
    event_bus: Arc<EventBus>,
    config: CatalogConfig,
    state: Arc<StateCell<ContentState<PetList>>>,
    started: AtomicBool,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl PetCatalogStore {
    pub fn new(
        provider: Arc<dyn PetDataProvider>,
        event_bus: Arc<EventBus>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            provider,
            event_bus,
            config,
            state: Arc::new(StateCell::new(ContentState::Loading)),
            started: AtomicBool::new(false),
            task_handle: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ContentState<PetList> {
        self.state.get()
    }

    pub fn snapshot(&self) -> Snapshot<ContentState<PetList>> {
        self.state.snapshot()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Spawns the load on the current tokio runtime.
    ///
    /// Returns `Ok(false)` when a load was already started for this store.
    pub fn start_loading(&self) -> AppResult<bool> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| AppError::Other(format!("Catalog load needs a tokio runtime: {}", e)))?;

        if self.started.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }

        log::info!(
            "Loading catalog from {} provider ({} ms delay)",
            self.provider.name(),
            self.config.load_delay_ms
        );
        self.event_bus.emit(CatalogStateChanged::new("loading", None));

        let provider = Arc::clone(&self.provider);
        let event_bus = Arc::clone(&self.event_bus);
        let state = Arc::clone(&self.state);
        let delay = Duration::from_millis(self.config.load_delay_ms);

        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let result = provider.load_pets().await;
            complete(&state, &event_bus, result);
        });

        let mut handle = self.task_handle.lock().unwrap_or_else(PoisonError::into_inner);
        *handle = Some(task);
        Ok(true)
    }

    /// Waits for the background load started by [`start_loading`](Self::start_loading)
    /// and returns the resulting state. Returns the current state when no load is pending.
    pub async fn wait_loaded(&self) -> ContentState<PetList> {
        let task = {
            let mut handle = self.task_handle.lock().unwrap_or_else(PoisonError::into_inner);
            handle.take()
        };

        if let Some(task) = task {
            if let Err(e) = task.await {
                if e.is_cancelled() {
                    log::warn!("Catalog load was cancelled");
                } else {
                    let failure = LoadFailure::new(AppError::from(e));
                    log::error!("Catalog load task failed: {}", failure);
                    complete_with(&self.state, &self.event_bus, ContentState::Error(failure));
                }
            }
        }

        self.state()
    }

    /// Starts the load (if needed) and waits for it
    pub async fn load(&self) -> AppResult<ContentState<PetList>> {
        self.start_loading()?;
        Ok(self.wait_loaded().await)
    }

    /// Drops a pending load. The store stays in Loading for the rest of the session.
    pub fn cancel(&self) {
        let mut handle = self.task_handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = handle.take() {
            task.abort();
            log::info!("Catalog load cancelled");
        }
    }
}

impl Drop for PetCatalogStore {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn complete(
    state: &StateCell<ContentState<PetList>>,
    event_bus: &EventBus,
    result: AppResult<Vec<Pet>>,
) {
    let next = match result.and_then(|pets| {
        validate_catalog(&pets)?;
        Ok(pets)
    }) {
        Ok(pets) => ContentState::Success(PetList::from(pets)),
        Err(e) => {
            log::error!("Catalog load failed: {}", e);
            ContentState::Error(LoadFailure::new(e))
        }
    };
    complete_with(state, event_bus, next);
}

/// Applies the single terminal transition; later attempts are ignored
fn complete_with(
    state: &StateCell<ContentState<PetList>>,
    event_bus: &EventBus,
    next: ContentState<PetList>,
) {
    if state.get().is_terminal() {
        log::warn!("Catalog already resolved; ignoring {} transition", next.status());
        return;
    }

    let pet_count = next.data().map(|pets| pets.len());
    let status = next.status();
    state.replace(next);

    log::info!("Catalog {} ({} pets)", status, pet_count.unwrap_or(0));
    event_bus.emit(CatalogStateChanged::new(status, pet_count));
}
