//! App-wide yewdux store and its persistence hook.
//!
//! # Design
//! - One store holds the auth session and the watchlist; reducers are pure and
//!   describe storage work as [`Effect`]s.
//! - [`persist`] is the only place snapshots are written or removed.
//! - [`dispatch`] runs reduce and persist to completion inside one call so
//!   rapid events cannot interleave their read-modify-write cycles.

use crate::core::auth::{self, AuthAction, Session, UserProfile};
use crate::core::storage::{
    KeyValueStore, RATINGS_KEY, USER_KEY, WATCHLIST_KEY, load_snapshot_or_default, write_snapshot,
};
use crate::core::watchlist::{self, WatchlistAction, WatchlistEntry, WatchlistState};
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authentication session.
    pub auth: Session,
    /// Saved movies.
    pub watchlist: WatchlistState,
}

impl AppStore {
    /// Load both snapshots from `storage`; unreadable data starts empty.
    #[must_use]
    pub fn hydrate(storage: &dyn KeyValueStore) -> Self {
        let user: Option<UserProfile> = load_snapshot_or_default(storage, USER_KEY);
        let entries: Vec<WatchlistEntry> = load_snapshot_or_default(storage, WATCHLIST_KEY);
        Self {
            auth: Session::from_snapshot(user),
            watchlist: WatchlistState::from_snapshot(entries),
        }
    }
}

/// Storage work implied by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write the current user snapshot.
    SaveUser,
    /// Remove the user snapshot.
    RemoveUser,
    /// Write the current watchlist snapshot.
    SaveWatchlist,
    /// Remove the watchlist snapshot.
    RemoveWatchlist,
    /// Remove the reserved ratings key.
    RemoveRatings,
}

/// Any transition the store accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Authentication transition.
    Auth(AuthAction),
    /// Watchlist transition.
    Watchlist(WatchlistAction),
}

impl From<AuthAction> for AppAction {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<WatchlistAction> for AppAction {
    fn from(action: WatchlistAction) -> Self {
        Self::Watchlist(action)
    }
}

/// Apply `action` to the store without touching storage.
pub fn reduce(store: &mut AppStore, action: AppAction) -> Vec<Effect> {
    match action {
        AppAction::Auth(AuthAction::Logout) => {
            store.watchlist = WatchlistState::default();
            auth::reduce(&mut store.auth, AuthAction::Logout)
        }
        AppAction::Auth(action) => auth::reduce(&mut store.auth, action),
        AppAction::Watchlist(action) => watchlist::reduce(&mut store.watchlist, action),
    }
}

/// Carry out `effects` against `storage` using the current store contents.
///
/// Storage failures are logged; in-memory state stays authoritative.
pub fn persist(store: &AppStore, storage: &dyn KeyValueStore, effects: &[Effect]) {
    for effect in effects {
        let outcome = match effect {
            Effect::SaveUser => match &store.auth.user {
                Some(user) => write_snapshot(storage, USER_KEY, user),
                None => {
                    storage.delete(USER_KEY);
                    Ok(())
                }
            },
            Effect::SaveWatchlist => write_snapshot(storage, WATCHLIST_KEY, &store.watchlist.items),
            Effect::RemoveUser => {
                storage.delete(USER_KEY);
                Ok(())
            }
            Effect::RemoveWatchlist => {
                storage.delete(WATCHLIST_KEY);
                Ok(())
            }
            Effect::RemoveRatings => {
                storage.delete(RATINGS_KEY);
                Ok(())
            }
        };
        if let Err(err) = outcome {
            tracing::error!(key = err.key(), error = %err, "failed to persist snapshot");
        }
    }
}

/// Reduce `action` and persist its effects before returning.
pub fn dispatch(store: &mut AppStore, storage: &dyn KeyValueStore, action: impl Into<AppAction>) {
    let effects = reduce(store, action.into());
    persist(store, storage, &effects);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, load_snapshot};
    use marquee_api_models::MovieSummary;

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            ..MovieSummary::default()
        }
    }

    #[test]
    fn snapshot_tracks_memory_after_each_add() {
        let storage = MemoryStore::new();
        let mut store = AppStore::default();
        for id in [1, 1, 2] {
            dispatch(&mut store, &storage, WatchlistAction::Add(movie(id)));
            let persisted: Vec<MovieSummary> = load_snapshot(&storage, WATCHLIST_KEY)
                .expect("readable")
                .expect("present");
            assert_eq!(persisted, store.watchlist.items);
        }
        assert_eq!(store.watchlist.items.len(), 2);
    }

    #[test]
    fn logout_empties_watchlist_and_storage() {
        let storage = MemoryStore::new().with_entry(RATINGS_KEY, "{}");
        let mut store = AppStore::default();
        dispatch(&mut store, &storage, WatchlistAction::Add(movie(7)));
        dispatch(&mut store, &storage, AuthAction::Logout);
        assert!(watchlist::select_watchlist(&store.watchlist).is_empty());
        assert!(!storage.contains(WATCHLIST_KEY));
        assert!(!storage.contains(USER_KEY));
        assert!(!storage.contains(RATINGS_KEY));
    }

    #[test]
    fn failed_writes_keep_memory_state() {
        let storage = MemoryStore::rejecting_writes();
        let mut store = AppStore::default();
        dispatch(&mut store, &storage, WatchlistAction::Add(movie(3)));
        assert!(watchlist::select_is_in_watchlist(&store.watchlist, 3));
        assert!(storage.is_empty());
    }

    #[test]
    fn hydrate_ignores_garbage() {
        let storage = MemoryStore::new()
            .with_entry(USER_KEY, "definitely not json")
            .with_entry(WATCHLIST_KEY, "{\"oops\":");
        let store = AppStore::hydrate(&storage);
        assert_eq!(store, AppStore::default());
    }
}
