//! Durable two-slot credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth flow persists exactly two tokens: the identity-provider token and
//! the backend session token. Storage is a pure pass-through keyed by slot;
//! token contents are never inspected here.


#[cfg(feature = "hydrate")]
pub mod local;

use std::collections::HashMap;

/// The two credential slots the app persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Token issued by the external identity provider.
    Identity,
    /// Token issued by the backend in exchange for an identity token.
    Session,
}

impl Slot {
    /// Fixed storage key for this slot.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Slot::Identity => "identity_token",
            Slot::Session => "session_token",
        }
    }
}

/// Durable key-value storage for the two token slots.
///
/// Implementations survive process restarts where the host allows it
/// (`local::LocalStorageStore` in the browser); `MemoryStore` backs tests
/// and server-side rendering.
pub trait SessionStore {
    /// Read a slot; `None` when the slot is absent.
    fn get(&self, slot: Slot) -> Option<String>;
    /// Write a slot, replacing any previous value.
    fn set(&self, slot: Slot, token: &str);
    /// Remove a slot.
    fn clear(&self, slot: Slot);
}

/// In-memory store for tests and SSR.
#[derive(Default)]
pub struct MemoryStore {
    slots: std::cell::RefCell<HashMap<Slot, String>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with token values, for restore-at-startup paths.
    #[must_use]
    pub fn with_tokens(identity: Option<&str>, session: Option<&str>) -> Self {
        let store = Self::new();
        if let Some(token) = identity {
            store.set(Slot::Identity, token);
        }
        if let Some(token) = session {
            store.set(Slot::Session, token);
        }
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, slot: Slot) -> Option<String> {
        self.slots.borrow().get(&slot).cloned()
    }

    fn set(&self, slot: Slot, token: &str) {
        self.slots.borrow_mut().insert(slot, token.to_owned());
    }

    fn clear(&self, slot: Slot) {
        self.slots.borrow_mut().remove(&slot);
    }
}

impl<S: SessionStore> SessionStore for std::rc::Rc<S> {
    fn get(&self, slot: Slot) -> Option<String> {
        (**self).get(slot)
    }

    fn set(&self, slot: Slot, token: &str) {
        (**self).set(slot, token);
    }

    fn clear(&self, slot: Slot) {
        (**self).clear(slot);
    }
}
