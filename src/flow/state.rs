//! In-memory auth state and the authorization predicate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this state through an
//! `RwSignal` mirror; the flow layer owns the authoritative copy and keeps
//! it paired with the persisted slots.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Where the login state machine currently sits.
///
/// Authorized/unauthorized is deliberately NOT a phase: it is derived fresh
/// from the token pair on every evaluation so it can never go stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// No usable session; the sign-in destination is the only way forward.
    #[default]
    SignedOut,
    /// Identity token accepted, exchange protocol in flight.
    Exchanging,
    /// Both tokens held; entered on exchange success or directly at startup
    /// when both persisted tokens are present.
    SignedIn,
}

/// The two in-memory token slots plus the machine phase.
///
/// Plain fields, not signals: the Leptos layer mirrors a snapshot of this
/// struct through context after each flow operation completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Opaque identity-provider token; embeds its own expiry.
    pub identity_token: Option<String>,
    /// Opaque backend session token; no client-visible expiry.
    pub session_token: Option<String>,
    /// Current machine phase.
    pub phase: AuthPhase,
}

impl AuthState {
    /// State as restored from the two persisted slots at startup. `SignedIn`
    /// is reachable directly here, without passing through `Exchanging`,
    /// when both tokens were persisted by an earlier session.
    #[must_use]
    pub fn from_slots(identity_token: Option<String>, session_token: Option<String>) -> Self {
        let phase = if identity_token.is_some() && session_token.is_some() {
            AuthPhase::SignedIn
        } else {
            AuthPhase::SignedOut
        };
        Self { identity_token, session_token, phase }
    }

    /// The authorization predicate: both tokens present and the identity
    /// token not expired. Pure; `expired` is the external expiry collaborator.
    pub fn authorized(&self, expired: impl Fn(&str) -> bool) -> bool {
        match (&self.identity_token, &self.session_token) {
            (Some(identity), Some(_)) => !expired(identity),
            _ => false,
        }
    }
}
