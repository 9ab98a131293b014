//! GraphQL operations for account provisioning and session establishment.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the persisted
//! session token attached as the `authorization` header and a resettable
//! response cache for the read path.
//!
//! ERROR HANDLING
//! ==============
//! Backend errors and transport failures both surface as
//! [`ApiError`](super::types::ApiError); the flow layer decides which codes
//! are fatal. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, GqlResponse};

/// Mutation provisioning an account keyed by an identity token. Idempotent
/// in intent: re-running it for an existing account fails with the
/// "already exists" code, which the exchange protocol swallows.
pub const CREATE_ACCOUNT_MUTATION: &str = "\
mutation createAccount($identityToken: String!, $name: String) {
  createAccount(authProvider: { identity: { idToken: $identityToken } }, name: $name) {
    id
  }
}";

/// Mutation exchanging an identity token for a backend session token.
pub const ESTABLISH_SESSION_MUTATION: &str = "\
mutation establishSession($identityToken: String!) {
  establishSession(identity: { idToken: $identityToken }) {
    token
    account {
      id
    }
  }
}";

/// Variables for [`CREATE_ACCOUNT_MUTATION`]. An absent display name is
/// omitted from the map so the backend sees a null `$name`.
#[must_use]
pub fn create_account_variables(identity_token: &str, display_name: Option<&str>) -> serde_json::Value {
    let mut variables = serde_json::json!({ "identityToken": identity_token });
    if let Some(name) = display_name {
        variables["name"] = serde_json::Value::String(name.to_owned());
    }
    variables
}

/// Variables for [`ESTABLISH_SESSION_MUTATION`].
#[must_use]
pub fn establish_session_variables(identity_token: &str) -> serde_json::Value {
    serde_json::json!({ "identityToken": identity_token })
}

/// Collapse a response envelope into a single `Result`. The first reported
/// error wins; an envelope with neither data nor errors is malformed.
pub fn resolve_envelope<T>(response: GqlResponse<T>) -> Result<T, ApiError> {
    if let Some(errors) = response.errors {
        if let Some(first) = errors.into_iter().next() {
            return Err(first.into());
        }
    }
    response
        .data
        .ok_or_else(|| ApiError::transport("malformed response: missing data"))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("auth request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cache_key(query: &str, variables: &serde_json::Value) -> String {
    format!("{query}\u{1}{variables}")
}

/// GraphQL executor over HTTP with a session-scoped response cache.
///
/// Implements the flow's [`AuthBackend`](crate::flow::AuthBackend) and
/// [`RemoteCache`](crate::flow::RemoteCache) seams. The cache memoizes the
/// read path only; mutations always go to the wire.
#[cfg(feature = "hydrate")]
pub struct GraphqlApi {
    endpoint: String,
    cache: std::cell::RefCell<std::collections::HashMap<String, serde_json::Value>>,
}

#[cfg(feature = "hydrate")]
impl GraphqlApi {
    /// Executor posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), cache: std::cell::RefCell::new(std::collections::HashMap::new()) }
    }

    /// POST one operation and decode its envelope.
    ///
    /// # Errors
    ///
    /// Transport failures and non-OK statuses map to a codeless `ApiError`;
    /// envelope errors keep their backend code.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, ApiError> {
        use crate::session::{SessionStore, Slot};

        let payload = serde_json::json!({ "query": query, "variables": variables });
        let mut request = gloo_net::http::Request::post(&self.endpoint);
        if let Some(token) = crate::session::local::LocalStorageStore.get(Slot::Session) {
            request = request.header("authorization", &token);
        }
        let response = request
            .json(&payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::transport(request_failed_message(response.status())));
        }
        let envelope: GqlResponse<T> = response
            .json()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        resolve_envelope(envelope)
    }

    /// Execute a read, memoizing the raw `data` value until the next
    /// [`reset`](crate::flow::RemoteCache::reset). Protected views fetch
    /// through here so a login/logout boundary can discard results that may
    /// belong to a different user.
    ///
    /// # Errors
    ///
    /// Same surface as [`execute`](Self::execute).
    pub async fn query(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        let key = cache_key(query, &variables);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(hit.clone());
        }
        let data: serde_json::Value = self.execute(query, variables).await?;
        self.cache.borrow_mut().insert(key, data.clone());
        Ok(data)
    }
}

#[cfg(feature = "hydrate")]
impl crate::flow::AuthBackend for GraphqlApi {
    async fn create_account(
        &self,
        identity_token: &str,
        display_name: Option<&str>,
    ) -> Result<super::types::AccountRef, ApiError> {
        let variables = create_account_variables(identity_token, display_name);
        let data: super::types::CreateAccountData = self.execute(CREATE_ACCOUNT_MUTATION, variables).await?;
        Ok(data.create_account)
    }

    async fn establish_session(&self, identity_token: &str) -> Result<super::types::SessionGrant, ApiError> {
        let variables = establish_session_variables(identity_token);
        let data: super::types::EstablishSessionData = self.execute(ESTABLISH_SESSION_MUTATION, variables).await?;
        Ok(data.establish_session)
    }
}

#[cfg(feature = "hydrate")]
impl crate::flow::RemoteCache for GraphqlApi {
    async fn reset(&self) {
        self.cache.borrow_mut().clear();
    }
}
