//! Expiry check for the identity-provider token.
//!
//! The token is otherwise opaque to this app; only the `exp` claim in the
//! JWT payload segment is read. Signature verification belongs to the
//! backend, not a browser client.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

#[derive(Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// `exp` claim (seconds since epoch), or `None` when the token is not a
/// decodable JWT or carries no expiry.
#[must_use]
pub fn expires_at(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: ExpiryClaims = serde_json::from_slice(&bytes).ok()?;
    claims.exp
}

/// Whether the token is expired at `now_secs`. Fails closed: a malformed
/// token or a missing `exp` claim counts as expired.
#[must_use]
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    expires_at(token).is_none_or(|exp| exp <= now_secs)
}

/// Expiry against the browser clock.
#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn is_token_expired(token: &str) -> bool {
    let now_secs = (js_sys::Date::now() / 1000.0) as i64;
    is_expired_at(token, now_secs)
}
