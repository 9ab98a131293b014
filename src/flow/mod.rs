//! Authorization state machine and token-exchange protocol.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the in-memory token pair and the pure authorization
//! predicate; `routes` classifies destinations without side effects; and
//! `auth_flow` drives the two-step exchange and logout against explicit
//! collaborator handles (session store, backend, cache, navigator) so the
//! whole machine runs under test with no browser present.

pub mod auth_flow;
pub mod routes;
pub mod state;

pub use auth_flow::{AuthBackend, AuthFlow, ExchangeError, Navigator, RemoteCache};
pub use routes::{PROTECTED_PATH, RouteClass, RouteDecision, SIGN_IN_PATH, classify_path, decide};
pub use state::{AuthPhase, AuthState};
