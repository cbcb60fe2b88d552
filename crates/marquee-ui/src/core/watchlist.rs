//! Watchlist state container.
//!
//! # Design
//! - Entries are unique by movie id and keep insertion order.
//! - The persisted snapshot is the JSON array of entries.

use crate::core::store::Effect;
use marquee_api_models::{MovieSummary, TmdbId};

/// A movie saved to the watchlist.
pub type WatchlistEntry = MovieSummary;

/// Saved movies in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatchlistState {
    /// Entries, unique by id.
    pub items: Vec<WatchlistEntry>,
}

impl WatchlistState {
    /// State seeded from a persisted snapshot, dropping duplicate ids.
    #[must_use]
    pub fn from_snapshot(entries: Vec<WatchlistEntry>) -> Self {
        let mut state = Self::default();
        for entry in entries {
            if !select_is_in_watchlist(&state, entry.id) {
                state.items.push(entry);
            }
        }
        state
    }
}

/// Watchlist transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum WatchlistAction {
    /// Append a movie unless its id is already saved.
    Add(WatchlistEntry),
    /// Drop the movie with this id.
    Remove(TmdbId),
    /// Drop every entry.
    Clear,
}

/// Apply `action` to `state`, returning the persistence effects it implies.
pub fn reduce(state: &mut WatchlistState, action: WatchlistAction) -> Vec<Effect> {
    match action {
        WatchlistAction::Add(entry) => {
            if select_is_in_watchlist(state, entry.id) {
                return Vec::new();
            }
            state.items.push(entry);
            vec![Effect::SaveWatchlist]
        }
        WatchlistAction::Remove(id) => {
            state.items.retain(|item| item.id != id);
            vec![Effect::SaveWatchlist]
        }
        WatchlistAction::Clear => {
            state.items.clear();
            vec![Effect::RemoveWatchlist]
        }
    }
}

/// Action that flips membership of `movie`.
#[must_use]
pub fn toggle(state: &WatchlistState, movie: WatchlistEntry) -> WatchlistAction {
    if select_is_in_watchlist(state, movie.id) {
        WatchlistAction::Remove(movie.id)
    } else {
        WatchlistAction::Add(movie)
    }
}

/// Saved movies in insertion order.
#[must_use]
pub fn select_watchlist(state: &WatchlistState) -> &[WatchlistEntry] {
    &state.items
}

/// Whether a movie with `id` is saved.
#[must_use]
pub fn select_is_in_watchlist(state: &WatchlistState, id: TmdbId) -> bool {
    state.items.iter().any(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: TmdbId, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            ..MovieSummary::default()
        }
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let mut state = WatchlistState::default();
        assert_eq!(
            reduce(&mut state, WatchlistAction::Add(movie(1, "Alien"))),
            vec![Effect::SaveWatchlist]
        );
        assert!(reduce(&mut state, WatchlistAction::Add(movie(1, "Alien (copy)"))).is_empty());
        assert_eq!(select_watchlist(&state).len(), 1);
        assert_eq!(select_watchlist(&state)[0].title, "Alien");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut state = WatchlistState::default();
        for (id, title) in [(3, "C"), (1, "A"), (2, "B")] {
            reduce(&mut state, WatchlistAction::Add(movie(id, title)));
        }
        let ids: Vec<_> = select_watchlist(&state).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_absent_id_still_persists() {
        let mut state = WatchlistState::from_snapshot(vec![movie(1, "A")]);
        let effects = reduce(&mut state, WatchlistAction::Remove(42));
        assert_eq!(effects, vec![Effect::SaveWatchlist]);
        assert!(select_is_in_watchlist(&state, 1));
    }

    #[test]
    fn clear_removes_snapshot() {
        let mut state = WatchlistState::from_snapshot(vec![movie(1, "A"), movie(2, "B")]);
        let effects = reduce(&mut state, WatchlistAction::Clear);
        assert_eq!(effects, vec![Effect::RemoveWatchlist]);
        assert!(select_watchlist(&state).is_empty());
    }

    #[test]
    fn snapshot_with_duplicates_keeps_first() {
        let state = WatchlistState::from_snapshot(vec![movie(5, "first"), movie(5, "second")]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "first");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = WatchlistState::default();
        let add = toggle(&state, movie(9, "Heat"));
        assert!(matches!(add, WatchlistAction::Add(_)));
        reduce(&mut state, add);
        assert_eq!(toggle(&state, movie(9, "Heat")), WatchlistAction::Remove(9));
    }
}
