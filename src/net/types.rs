//! Wire DTOs and error shapes for the backend auth operations.
//!
//! DESIGN
//! ======
//! The backend speaks a GraphQL envelope: `{ data, errors }` where each error
//! carries an optional numeric code. Transport-level failures are folded into
//! the same `ApiError` shape with no code so the flow layer handles exactly
//! one error type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use thiserror::Error;

/// Backend error code meaning "an account for this identity already exists".
///
/// The exchange protocol swallows exactly this code; every other code is
/// fatal to the attempt.
pub const ACCOUNT_ALREADY_EXISTS_CODE: i64 = 3023;

/// Error from a backend operation, or from the transport beneath it
/// (in which case `code` is `None`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Backend-assigned error code, absent for transport failures.
    pub code: Option<i64>,
    /// Human-readable error text.
    pub message: String,
}

impl ApiError {
    /// Transport-level failure with no backend code.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }

    /// Whether this is the non-fatal "account already exists" signal.
    #[must_use]
    pub fn is_account_conflict(&self) -> bool {
        self.code == Some(ACCOUNT_ALREADY_EXISTS_CODE)
    }
}

/// One error entry in a GraphQL response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GqlError {
    /// Backend error code, when the backend assigns one.
    pub code: Option<i64>,
    /// Error text.
    pub message: String,
}

impl From<GqlError> for ApiError {
    fn from(err: GqlError) -> Self {
        Self { code: err.code, message: err.message }
    }
}

/// GraphQL response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GqlResponse<T> {
    /// Operation payload, absent when the request failed outright.
    pub data: Option<T>,
    /// Errors reported by the backend, if any.
    pub errors: Option<Vec<GqlError>>,
}

/// Reference to a backend account record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountRef {
    /// Unique account identifier.
    pub id: String,
}

/// Successful session establishment: the backend session token plus the
/// account it belongs to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionGrant {
    /// Opaque backend session token.
    pub token: String,
    /// Account the session was granted for.
    pub account: AccountRef,
}

/// `data` payload of the `createAccount` mutation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateAccountData {
    /// Created account reference.
    #[serde(rename = "createAccount")]
    pub create_account: AccountRef,
}

/// `data` payload of the `establishSession` mutation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EstablishSessionData {
    /// Granted session.
    #[serde(rename = "establishSession")]
    pub establish_session: SessionGrant,
}
