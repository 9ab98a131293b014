use super::*;

fn state(identity: Option<&str>, session: Option<&str>) -> AuthState {
    AuthState {
        identity_token: identity.map(str::to_owned),
        session_token: session.map(str::to_owned),
        phase: AuthPhase::default(),
    }
}

const NEVER_EXPIRED: fn(&str) -> bool = |_| false;
const ALWAYS_EXPIRED: fn(&str) -> bool = |_| true;

#[test]
fn default_state_is_signed_out_with_no_tokens() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::SignedOut);
    assert!(state.identity_token.is_none());
    assert!(state.session_token.is_none());
}

#[test]
fn from_slots_is_signed_in_only_with_both_tokens() {
    let both = AuthState::from_slots(Some("tok123".to_owned()), Some("sess456".to_owned()));
    assert_eq!(both.phase, AuthPhase::SignedIn);

    let identity_only = AuthState::from_slots(Some("tok123".to_owned()), None);
    assert_eq!(identity_only.phase, AuthPhase::SignedOut);

    let session_only = AuthState::from_slots(None, Some("sess456".to_owned()));
    assert_eq!(session_only.phase, AuthPhase::SignedOut);

    let neither = AuthState::from_slots(None, None);
    assert_eq!(neither.phase, AuthPhase::SignedOut);
}

#[test]
fn authorized_requires_both_tokens() {
    assert!(!state(None, None).authorized(NEVER_EXPIRED));
    assert!(!state(Some("tok123"), None).authorized(NEVER_EXPIRED));
    assert!(!state(None, Some("sess456")).authorized(NEVER_EXPIRED));
    assert!(state(Some("tok123"), Some("sess456")).authorized(NEVER_EXPIRED));
}

#[test]
fn authorized_is_false_when_identity_token_expired() {
    assert!(!state(Some("tok123"), Some("sess456")).authorized(ALWAYS_EXPIRED));
}

#[test]
fn expiry_check_sees_the_identity_token_only() {
    let seen = std::cell::RefCell::new(Vec::new());
    let authorized = state(Some("tok123"), Some("sess456")).authorized(|token| {
        seen.borrow_mut().push(token.to_owned());
        false
    });
    assert!(authorized);
    assert_eq!(*seen.borrow(), vec!["tok123".to_owned()]);
}

#[test]
fn expiry_check_is_not_consulted_without_both_tokens() {
    let calls = std::cell::Cell::new(0);
    let _ = state(Some("tok123"), None).authorized(|_| {
        calls.set(calls.get() + 1);
        false
    });
    assert_eq!(calls.get(), 0);
}

#[test]
fn authorized_ignores_the_phase_field() {
    // Derived purely from the token pair: a stale phase must not grant access.
    let mut s = state(None, None);
    s.phase = AuthPhase::SignedIn;
    assert!(!s.authorized(NEVER_EXPIRED));
}
