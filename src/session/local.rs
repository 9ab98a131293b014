//! Browser localStorage backing for the session store.
//!
//! Reads and writes silently no-op when `localStorage` is unavailable
//! (storage-medium failures are out of scope for the auth flow).

use super::{SessionStore, Slot};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `SessionStore` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn get(&self, slot: Slot) -> Option<String> {
        storage()?.get_item(slot.key()).ok().flatten()
    }

    fn set(&self, slot: Slot, token: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(slot.key(), token);
        }
    }

    fn clear(&self, slot: Slot) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(slot.key());
        }
    }
}
