//! The login exchange protocol and logout, driven against explicit
//! collaborator seams.
//!
//! ARCHITECTURE
//! ============
//! `AuthFlow` owns the authoritative `AuthState` and four handles passed at
//! construction: the durable session store, the backend operations, the
//! remote response cache, and the navigator. Every mutation keeps the
//! in-memory pair and the persisted slots equal within the same logical
//! step; the only sanctioned divergence is mid-exchange.
//!
//! ERROR HANDLING
//! ==============
//! The single recognized conflict code ("account already exists") is
//! swallowed and the protocol proceeds; every other failure aborts the
//! attempt with the identity token retained, so an explicit re-login retries
//! the exchange without a fresh identity-provider round trip. No automatic
//! retries.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use thiserror::Error;

use super::routes::{PROTECTED_PATH, SIGN_IN_PATH};
use super::state::{AuthPhase, AuthState};
use crate::net::types::{AccountRef, ApiError, SessionGrant};
use crate::session::{SessionStore, Slot};

/// The two backend operations the exchange protocol needs, both idempotent
/// in intent.
pub trait AuthBackend {
    /// Step A: provision an account keyed by the identity token.
    async fn create_account(
        &self,
        identity_token: &str,
        display_name: Option<&str>,
    ) -> Result<AccountRef, ApiError>;

    /// Step B: exchange the identity token for a backend session token.
    async fn establish_session(&self, identity_token: &str) -> Result<SessionGrant, ApiError>;
}

/// Remote data-fetching cache that can discard everything it holds.
/// Reset at login and logout boundaries since cached results may belong to
/// a different (or no) prior user.
pub trait RemoteCache {
    /// Drop all cached results.
    async fn reset(&self);
}

impl<B: AuthBackend> AuthBackend for std::rc::Rc<B> {
    async fn create_account(
        &self,
        identity_token: &str,
        display_name: Option<&str>,
    ) -> Result<AccountRef, ApiError> {
        (**self).create_account(identity_token, display_name).await
    }

    async fn establish_session(&self, identity_token: &str) -> Result<SessionGrant, ApiError> {
        (**self).establish_session(identity_token).await
    }
}

impl<C: RemoteCache> RemoteCache for std::rc::Rc<C> {
    async fn reset(&self) {
        (**self).reset().await;
    }
}

/// Navigation handle; `leptos_router::use_navigate` closures plug in via the
/// blanket impl.
pub trait Navigator {
    /// Navigate to `path`.
    fn go(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn go(&self, path: &str) {
        self(path);
    }
}

/// Fatal outcome of one exchange attempt. The conflict code never appears
/// here; it is handled inside the protocol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Step A failed with something other than the recognized conflict.
    /// Step B was not attempted.
    #[error("account provisioning failed: {0}")]
    Provisioning(#[source] ApiError),
    /// Step B failed; the session slot is untouched.
    #[error("session establishment failed: {0}")]
    Session(#[source] ApiError),
}

/// The authorization state machine.
///
/// `SignedOut -> Exchanging -> SignedIn` on a successful login;
/// `Exchanging -> SignedOut` on a fatal exchange failure; `SignedIn` is also
/// reachable directly at construction when both persisted tokens are present.
pub struct AuthFlow<S, B, C, N> {
    store: S,
    backend: B,
    cache: C,
    navigator: N,
    state: AuthState,
}

impl<S, B, C, N> AuthFlow<S, B, C, N>
where
    S: SessionStore,
    B: AuthBackend,
    C: RemoteCache,
    N: Navigator,
{
    /// Build the flow from its collaborators, reading both persisted slots
    /// into memory.
    pub fn restore(store: S, backend: B, cache: C, navigator: N) -> Self {
        let state = AuthState::from_slots(store.get(Slot::Identity), store.get(Slot::Session));
        Self { store, backend, cache, navigator, state }
    }

    /// Current machine state (the authoritative copy).
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Login callback for a successful identity-provider authentication.
    ///
    /// Persists the identity token before anything else, so a later exchange
    /// failure does not cost the user their provider login, then runs the
    /// exchange protocol. On success the flow has navigated to the protected
    /// destination; on failure the caller stays on sign-in.
    ///
    /// # Errors
    ///
    /// [`ExchangeError`] when either exchange step fails fatally. The
    /// identity slot keeps the token either way.
    pub async fn login(
        &mut self,
        identity_token: String,
        display_name: Option<String>,
    ) -> Result<(), ExchangeError> {
        self.store.set(Slot::Identity, &identity_token);
        self.state.identity_token = Some(identity_token.clone());
        self.state.phase = AuthPhase::Exchanging;

        match self.exchange(&identity_token, display_name.as_deref()).await {
            Ok(()) => {
                self.state.phase = AuthPhase::SignedIn;
                Ok(())
            }
            Err(err) => {
                self.state.phase = AuthPhase::SignedOut;
                log::warn!("token exchange failed: {err}");
                Err(err)
            }
        }
    }

    /// Two sequential remote calls; Step B never starts before Step A has
    /// settled (success or swallowed conflict).
    async fn exchange(
        &mut self,
        identity_token: &str,
        display_name: Option<&str>,
    ) -> Result<(), ExchangeError> {
        match self.backend.create_account(identity_token, display_name).await {
            Ok(account) => log::debug!("provisioned account {}", account.id),
            Err(err) if err.is_account_conflict() => {
                // Expected on every re-login by an existing user.
                log::debug!("account already exists, continuing to session");
            }
            Err(err) => return Err(ExchangeError::Provisioning(err)),
        }

        let grant = self
            .backend
            .establish_session(identity_token)
            .await
            .map_err(ExchangeError::Session)?;

        self.store.set(Slot::Session, &grant.token);
        self.state.session_token = Some(grant.token);

        // Stale results could belong to a different prior user.
        self.cache.reset().await;
        self.navigator.go(PROTECTED_PATH);
        Ok(())
    }

    /// Full reset: both memory fields, both persisted slots, and the remote
    /// cache are cleared before the navigation to sign-in is issued.
    pub async fn logout(&mut self) {
        self.state = AuthState::default();
        self.store.clear(Slot::Identity);
        self.store.clear(Slot::Session);
        self.cache.reset().await;
        self.navigator.go(SIGN_IN_PATH);
    }
}
