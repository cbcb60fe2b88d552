//! Browser persistence for the app store.
//!
//! # Design
//! - `window.localStorage` is wrapped behind the [`KeyValueStore`] port.
//! - Every store mutation goes through [`dispatch_action`] so reduce and
//!   persist run inside the same event.

use crate::core::storage::{KeyValueStore, StorageError};
use crate::core::store::{self, AppAction, AppStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use yewdux::prelude::Dispatch;

/// `localStorage` adapter.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }

    fn delete(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            console::error!(format!("Failed to remove {key}: {err:?}"));
        }
    }
}

/// Load the persisted session and watchlist into the global store.
pub(crate) fn hydrate_store() {
    Dispatch::<AppStore>::new().set(AppStore::hydrate(&BrowserStorage));
}

/// Reduce `action` into the global store and persist its effects.
pub(crate) fn dispatch_action(dispatch: &Dispatch<AppStore>, action: impl Into<AppAction>) {
    let action = action.into();
    dispatch.reduce_mut(move |state| store::dispatch(state, &BrowserStorage, action));
}

/// Like [`dispatch_action`], deriving the action from the current store value.
pub(crate) fn dispatch_derived<A, F>(dispatch: &Dispatch<AppStore>, derive: F)
where
    A: Into<AppAction>,
    F: FnOnce(&AppStore) -> A + 'static,
{
    dispatch.reduce_mut(move |state| {
        let action = derive(state).into();
        store::dispatch(state, &BrowserStorage, action);
    });
}
