//! Favorites cache kept in sync with the server.
//!
//! Toggles update the local cache first and are reverted when the server call fails.
//! Toggles on the same country run one at a time in the order they were started; toggles
//! on different countries don't wait on each other.

use std::{
    collections::{BTreeSet, HashMap},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;

use crate::{
    client::{
        api::FavoritesRemote,
        error::ClientError,
        storage::{self, KeyValueStore},
    },
    model::input::CountryCode,
};

/// A toggle the server did not accept. The local cache has been restored.
#[derive(Error, Debug)]
#[error("Failed to update favorite {code}: {source}")]
pub struct ToggleError {
    pub code: CountryCode,
    /// State the toggle tried to reach
    pub favorite: bool,
    pub source: ClientError,
}

#[derive(Debug, Default)]
struct FavoritesState {
    favorites: BTreeSet<CountryCode>,
    unsynced: BTreeSet<CountryCode>,
}

pub struct FavoritesSync<R> {
    remote: R,
    store: Arc<dyn KeyValueStore>,
    state: Mutex<FavoritesState>,
    locks: Mutex<HashMap<CountryCode, Arc<tokio::sync::Mutex<()>>>>,
}

impl<R: FavoritesRemote> FavoritesSync<R> {
    /// Creates the sync component, starting from the locally cached favorites.
    pub fn new(remote: R, store: Arc<dyn KeyValueStore>) -> Self {
        let favorites = storage::load_favorites(store.as_ref());

        Self {
            remote,
            store,
            state: Mutex::new(FavoritesState {
                favorites,
                unsynced: BTreeSet::new(),
            }),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn is_favorite(&self, code: &CountryCode) -> bool {
        self.state().favorites.contains(code)
    }

    pub fn favorites(&self) -> BTreeSet<CountryCode> {
        self.state().favorites.clone()
    }

    /// Codes whose server state is unknown after a failed toggle.
    ///
    /// The server may or may not have applied the change; the next
    /// [`load_favorites`](Self::load_favorites) settles it.
    pub fn unsynced(&self) -> BTreeSet<CountryCode> {
        self.state().unsynced.clone()
    }

    /// Flips a favorite, returning the new state once the server confirmed it.
    pub async fn toggle_favorite(&self, code: &CountryCode) -> Result<bool, ToggleError> {
        let lock = self.lock_for(code);
        let result = {
            let _guard = lock.lock().await;
            self.apply_toggle(code).await
        };

        drop(lock);
        self.release_lock(code);

        result
    }

    async fn apply_toggle(&self, code: &CountryCode) -> Result<bool, ToggleError> {
        let favorite = {
            let mut state = self.state();
            let favorite = !state.favorites.contains(code);
            set_membership(&mut state.favorites, code, favorite);
            self.persist(&state.favorites);
            favorite
        };

        let result = if favorite {
            self.remote.add(code).await.map(|_| ())
        } else {
            self.remote.remove(code).await
        };

        // A load may have replaced the cache while the request was in flight
        let mut state = self.state();
        match result {
            Ok(()) => {
                set_membership(&mut state.favorites, code, favorite);
                self.persist(&state.favorites);
                state.unsynced.remove(code);
                Ok(favorite)
            }
            Err(source) => {
                tracing::warn!("Reverting favorite {code}: {source}");

                set_membership(&mut state.favorites, code, !favorite);
                self.persist(&state.favorites);

                if source.is_ambiguous() {
                    state.unsynced.insert(code.clone());
                }

                Err(ToggleError {
                    code: code.clone(),
                    favorite,
                    source,
                })
            }
        }
    }

    /// Replaces the local cache with the server's favorites.
    pub async fn load_favorites(&self) -> Result<BTreeSet<CountryCode>, ClientError> {
        let favorites: BTreeSet<CountryCode> = self.remote.list().await?.into_iter().collect();

        let mut state = self.state();
        state.favorites = favorites.clone();
        state.unsynced.clear();
        self.persist(&state.favorites);

        Ok(favorites)
    }

    fn state(&self) -> MutexGuard<'_, FavoritesState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_for(&self, code: &CountryCode) -> Arc<tokio::sync::Mutex<()>> {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(code.clone())
            .or_default()
            .clone()
    }

    /// Drops the code's lock once no toggle holds or waits on it.
    fn release_lock(&self, code: &CountryCode) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);

        if locks.get(code).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(code);
        }
    }

    /// Local persistence is best effort, the in-memory cache stays authoritative.
    fn persist(&self, favorites: &BTreeSet<CountryCode>) {
        if let Err(e) = storage::save_favorites(self.store.as_ref(), favorites) {
            tracing::warn!("Failed to persist favorites: {e}");
        }
    }
}

fn set_membership(set: &mut BTreeSet<CountryCode>, code: &CountryCode, member: bool) {
    if member {
        set.insert(code.clone());
    } else {
        set.remove(code);
    }
}
