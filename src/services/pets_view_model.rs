// src/services/pets_view_model.rs
//
// Derived View Model - composes the independent state cells into the two
// outputs consumed by the presentation layer:
//
//   catalog ─┐
//   filter  ─┼─► pet list ─┐
//   favorites┴─────────────┼─► selected pet
//   selection ─────────────┘
//
// Both outputs are memoized on the identity (version/value) of their inputs
// and published on the event bus whenever they are recomputed. Every
// recompute gets a generation number; publication goes through a sequencer
// that never delivers a generation older than one already sent, so refreshes
// racing on different threads cannot leave subscribers on a stale value.

use std::cell::Cell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::catalog_store::PetCatalogStore;
use super::derivation::{derive_pet_list, derive_selected_pet};
use super::favorites_state::FavoritesState;
use super::filter_state::FilterState;
use super::selection_state::SelectionState;
use crate::domain::{ContentState, Pet, PetFilter, PetId, PetList};
use crate::error::AppResult;
use crate::events::{
    CatalogStateChanged, EventBus, FavoriteToggled, FilterChanged, PetListUpdated, PetSelected,
    SelectedPetUpdated,
};

thread_local! {
    /// Set while this thread is delivering outputs to subscribers
    static PUBLISHING: Cell<bool> = const { Cell::new(false) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListKey {
    catalog_version: u64,
    filter: PetFilter,
    favorites_version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SelectionKey {
    list_generation: u64,
    selected: Option<PetId>,
    favorites_version: u64,
}

#[derive(Debug, Clone)]
struct Memo<K, V> {
    key: K,
    value: V,
}

#[derive(Debug, Default)]
struct DerivedMemo {
    list: Option<Memo<ListKey, ContentState<PetList>>>,
    /// Bumped on every list recompute; the selection memoizes on it
    list_generation: u64,
    selected: Option<Memo<SelectionKey, Option<Pet>>>,
    selection_generation: u64,
    stats: RecomputeStats,
}

/// Last generation of each output handed to the bus
#[derive(Debug, Default)]
struct Published {
    list: u64,
    selection: u64,
}

/// Which outputs a publish call actually delivered
#[derive(Debug, Clone, Copy, Default)]
struct Delivered {
    list: bool,
    selection: bool,
}

/// Result of one memoized computation, tagged with output generations
struct Computed {
    view: DerivedView,
    list_generation: u64,
    selection_generation: u64,
}

/// How often each derivation actually ran (memo misses)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    pub list: u64,
    pub selection: u64,
}

/// Current values of both outputs after a refresh
#[derive(Debug, Clone)]
pub struct DerivedView {
    pub filter: PetFilter,
    pub pets: ContentState<PetList>,
    pub selected: Option<Pet>,
}

pub struct PetsViewModel {
    catalog: Arc<PetCatalogStore>,
    filter: Arc<FilterState>,
    favorites: Arc<FavoritesState>,
    selection: Arc<SelectionState>,
    event_bus: Arc<EventBus>,
    memo: Mutex<DerivedMemo>,
    published: Mutex<Published>,
}

impl PetsViewModel {
    /// Builds the view model and subscribes it to every input event
    pub fn new(
        catalog: Arc<PetCatalogStore>,
        filter: Arc<FilterState>,
        favorites: Arc<FavoritesState>,
        selection: Arc<SelectionState>,
        event_bus: Arc<EventBus>,
    ) -> Arc<Self> {
        let view_model = Arc::new(Self {
            catalog,
            filter,
            favorites,
            selection,
            event_bus,
            memo: Mutex::new(DerivedMemo::default()),
            published: Mutex::new(Published::default()),
        });
        view_model.register_event_handlers();
        view_model
    }

    fn register_event_handlers(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        self.event_bus
            .subscribe::<CatalogStateChanged, _>(refresh_on(weak.clone()));
        self.event_bus
            .subscribe::<FilterChanged, _>(refresh_on(weak.clone()));
        self.event_bus
            .subscribe::<FavoriteToggled, _>(refresh_on(weak.clone()));
        self.event_bus.subscribe::<PetSelected, _>(refresh_on(weak));
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    pub fn set_filter(&self, filter: PetFilter) {
        self.filter.set(filter);
    }

    pub fn select_pet(&self, id: PetId) {
        self.selection.select(id);
    }

    pub fn toggle_favorite(&self, pet: &Pet) -> bool {
        self.favorites.toggle(pet)
    }

    /// Starts the catalog load; later calls are no-ops
    pub fn start(&self) -> AppResult<bool> {
        self.catalog.start_loading()
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    pub fn pets(&self) -> ContentState<PetList> {
        self.refresh().pets
    }

    pub fn selected_pet(&self) -> Option<Pet> {
        self.refresh().selected
    }

    pub fn current_filter(&self) -> PetFilter {
        self.filter.current()
    }

    pub fn pet_types(&self) -> &'static [PetFilter] {
        &PetFilter::ALL
    }

    pub fn favorite_ids(&self) -> Vec<PetId> {
        self.favorites.favorite_ids()
    }

    pub fn recompute_stats(&self) -> RecomputeStats {
        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats
    }

    /// Subscribes to the pet list and starts the catalog load on first use.
    /// The handler receives the current list immediately.
    ///
    /// Fails without subscribing when no tokio runtime is available.
    pub fn subscribe_pets<F>(&self, handler: F) -> AppResult<()>
    where
        F: Fn(&PetListUpdated) + Send + Sync + 'static,
    {
        self.catalog.start_loading()?;

        let handler = Arc::new(handler);
        let subscribed = Arc::clone(&handler);
        self.event_bus
            .subscribe::<PetListUpdated, _>(move |event| subscribed(event));

        let mut published = self.lock_published();
        let (computed, delivered) = self.publish_latest(&mut published, self.compute());
        if !delivered.list {
            delivering(|| handler(&PetListUpdated::new(computed.view.filter, computed.view.pets)));
            self.publish_latest(&mut published, self.compute());
        }
        Ok(())
    }

    /// Subscribes to the selected pet; the handler receives the current value immediately
    pub fn subscribe_selected_pet<F>(&self, handler: F)
    where
        F: Fn(&SelectedPetUpdated) + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let subscribed = Arc::clone(&handler);
        self.event_bus
            .subscribe::<SelectedPetUpdated, _>(move |event| subscribed(event));

        let mut published = self.lock_published();
        let (computed, delivered) = self.publish_latest(&mut published, self.compute());
        if !delivered.selection {
            delivering(|| handler(&SelectedPetUpdated::new(computed.view.selected)));
            self.publish_latest(&mut published, self.compute());
        }
    }

    /// Brings both outputs up to date with the inputs.
    ///
    /// Each derivation only runs when one of its inputs changed identity;
    /// outputs that were recomputed are published on the bus.
    ///
    /// Subscribers may call back into the view model. A refresh made from
    /// inside a handler only computes; the publisher already running on
    /// this thread delivers whatever it produced.
    pub fn refresh(&self) -> DerivedView {
        let computed = self.compute();
        if PUBLISHING.with(Cell::get) {
            return computed.view;
        }
        let mut published = self.lock_published();
        self.publish_latest(&mut published, computed).0.view
    }

    fn lock_published(&self) -> MutexGuard<'_, Published> {
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the memoized derivations against one consistent read of the inputs
    fn compute(&self) -> Computed {
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);

        let catalog = self.catalog.snapshot();
        let filter = self.filter.snapshot();
        let favorites = self.favorites.snapshot();
        let selection = self.selection.snapshot();

        let list_key = ListKey {
            catalog_version: catalog.version,
            filter: filter.value,
            favorites_version: favorites.version,
        };
        if memo.list.as_ref().map(|m| m.key) != Some(list_key) {
            let pets = derive_pet_list(&catalog.value, filter.value, &favorites.value);
            log::debug!(
                "Recomputed pet list: {} ({} pets, filter {})",
                pets.status(),
                pets.data().map(|p| p.len()).unwrap_or(0),
                filter.value
            );
            memo.list = Some(Memo {
                key: list_key,
                value: pets,
            });
            memo.list_generation += 1;
            memo.stats.list += 1;
        } else {
            log::trace!("Pet list memo hit (filter {})", filter.value);
        }

        let selection_key = SelectionKey {
            list_generation: memo.list_generation,
            selected: selection.value,
            favorites_version: favorites.version,
        };
        let pets = memo
            .list
            .as_ref()
            .map(|m| m.value.clone())
            .unwrap_or_default();

        if memo.selected.as_ref().map(|m| m.key) != Some(selection_key) {
            let selected = derive_selected_pet(&pets, selection.value, &favorites.value);
            if selection.value.is_some() && selected.is_none() {
                log::debug!(
                    "Selected pet {:?} is not in the current list",
                    selection.value
                );
            }
            memo.selected = Some(Memo {
                key: selection_key,
                value: selected,
            });
            memo.selection_generation += 1;
            memo.stats.selection += 1;
        }

        Computed {
            view: DerivedView {
                filter: filter.value,
                pets,
                selected: memo.selected.as_ref().and_then(|m| m.value.clone()),
            },
            list_generation: memo.list_generation,
            selection_generation: memo.selection_generation,
        }
    }

    /// Publishes until no output is newer than what subscribers last saw.
    /// Handlers that write inputs produce new generations, which the next
    /// round picks up.
    fn publish_latest(
        &self,
        published: &mut Published,
        mut computed: Computed,
    ) -> (Computed, Delivered) {
        let mut delivered = Delivered::default();
        loop {
            let round = self.publish(published, &computed);
            if !round.list && !round.selection {
                return (computed, delivered);
            }
            delivered.list |= round.list;
            delivered.selection |= round.selection;
            computed = self.compute();
        }
    }

    /// Emits every output newer than the last one published.
    /// The caller holds the sequencer lock for the whole call.
    fn publish(&self, published: &mut Published, computed: &Computed) -> Delivered {
        let mut delivered = Delivered::default();

        if computed.list_generation > published.list {
            published.list = computed.list_generation;
            delivering(|| {
                self.event_bus.emit(PetListUpdated::new(
                    computed.view.filter,
                    computed.view.pets.clone(),
                ))
            });
            delivered.list = true;
        } else if computed.list_generation < published.list {
            log::trace!(
                "Dropped pet list generation {} (already published {})",
                computed.list_generation,
                published.list
            );
        }

        if computed.selection_generation > published.selection {
            published.selection = computed.selection_generation;
            delivering(|| {
                self.event_bus
                    .emit(SelectedPetUpdated::new(computed.view.selected.clone()))
            });
            delivered.selection = true;
        }

        delivered
    }
}

fn delivering<R>(deliver: impl FnOnce() -> R) -> R {
    let outer = PUBLISHING.with(|flag| flag.replace(true));
    let result = deliver();
    PUBLISHING.with(|flag| flag.set(outer));
    result
}

fn refresh_on<E: 'static>(view_model: Weak<PetsViewModel>) -> impl Fn(&E) + Send + Sync + 'static {
    move |_event: &E| {
        if let Some(view_model) = view_model.upgrade() {
            view_model.refresh();
        }
    }
}
