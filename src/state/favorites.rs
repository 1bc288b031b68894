//! Persisted favorites store with hydration-safe defaults.
//!
//! DESIGN
//! ======
//! The server-rendered pass and the first client render must agree, so the
//! store starts from a deterministic empty state with `hydrated = false`.
//! A one-shot task then restores the persisted envelope from `localStorage`
//! and flips `hydrated` in the same notification. Consumers gate favorite
//! buttons and count badges on that flag instead of flashing a false
//! "not favorited" state while the gap lasts.
//!
//! ERROR HANDLING
//! ==============
//! Storage and decode failures degrade to the empty collection; nothing in
//! this module can fail the page.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::Car;
use crate::util::storage;

/// Fixed `localStorage` key for the persisted favorites envelope.
pub const STORAGE_KEY: &str = "favorites-storage";

/// Current envelope schema version.
pub const ENVELOPE_VERSION: u32 = 0;

/// Favorites collection plus hydration bookkeeping.
///
/// `favorites` is insertion-ordered and unique by car id; all mutation goes
/// through [`FavoritesState::toggle`] to keep that invariant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoritesState {
    /// Favorited cars in the order they were added.
    pub favorites: Vec<Car>,
    /// True once persisted state has been loaded (or confirmed absent).
    pub hydrated: bool,
    /// True once any toggle has run; a later hydration seed keeps the
    /// in-memory collection instead of overwriting it.
    pub dirty: bool,
}

impl FavoritesState {
    /// Add the car to the collection, or remove it when an entry with the
    /// same id is already present. A car without an id is ignored.
    pub fn toggle(&mut self, car: Car) {
        if car.id.is_empty() {
            return;
        }
        self.dirty = true;
        if let Some(pos) = self.favorites.iter().position(|c| c.id == car.id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(car);
        }
    }

    /// Whether a car with this id is currently favorited. `false` before
    /// hydration unless the user already toggled during the gap.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|c| c.id == id)
    }

    /// Number of favorited cars.
    #[must_use]
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Apply the persisted collection loaded at hydration time.
    ///
    /// Runs at most once: a second call is a no-op. When a toggle already
    /// happened this session the loaded data is discarded rather than
    /// clobbering the user's changes; the write-through on that toggle has
    /// already replaced the stored envelope anyway.
    pub fn seed(&mut self, loaded: Vec<Car>) {
        if self.hydrated {
            return;
        }
        if !self.dirty {
            self.favorites = loaded;
        }
        self.hydrated = true;
    }
}

/// Serialized wrapper written to `localStorage`.
///
/// Keeps the nested `{"state":{"favorites":[...]},"version":0}` layout the
/// previous front end used, so favorites saved before the rewrite survive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoritesEnvelope {
    /// Persisted payload.
    pub state: PersistedFavorites,
    /// Schema version; see [`ENVELOPE_VERSION`].
    pub version: u32,
}

/// Payload half of [`FavoritesEnvelope`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedFavorites {
    /// Favorited cars in insertion order.
    #[serde(default)]
    pub favorites: Vec<Car>,
}

/// Wrap a collection snapshot in the current envelope schema.
#[must_use]
pub fn envelope_for(favorites: &[Car]) -> FavoritesEnvelope {
    FavoritesEnvelope {
        state: PersistedFavorites {
            favorites: favorites.to_vec(),
        },
        version: ENVELOPE_VERSION,
    }
}

/// Decode a raw envelope string into the favorites collection.
///
/// Malformed JSON, a missing payload, or an unknown version all decode as
/// the empty collection; hydration never fails.
#[must_use]
pub fn decode_envelope(raw: &str) -> Vec<Car> {
    match serde_json::from_str::<FavoritesEnvelope>(raw) {
        Ok(envelope) if envelope.version == ENVELOPE_VERSION => envelope.state.favorites,
        _ => Vec::new(),
    }
}

/// Toggle a car and write the updated collection through to storage.
///
/// The in-memory update and the storage write happen inside one signal
/// `update`, so readers never observe a half-applied toggle.
pub fn toggle_favorite(store: RwSignal<FavoritesState>, car: Car) {
    store.update(|state| {
        state.toggle(car);
        storage::save_json(STORAGE_KEY, &envelope_for(&state.favorites));
    });
}

/// Restore persisted favorites once per page load.
///
/// Yields one scheduler tick before touching storage so the first client
/// render pass keeps the same deterministic default the server produced,
/// then seeds the collection and flips `hydrated` in a single notification.
/// No-op on the server and on stores that already hydrated.
pub fn spawn_hydration(store: RwSignal<FavoritesState>) {
    #[cfg(feature = "hydrate")]
    {
        if store.with_untracked(|state| state.hydrated) {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            let loaded = storage::load_raw(STORAGE_KEY)
                .map(|raw| decode_envelope(&raw))
                .unwrap_or_default();
            store.update(|state| state.seed(loaded));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}
