//! App configuration: backend endpoint and identity-provider settings.
//!
//! Fields are enumerated explicitly so the embedding shell can override any
//! of them at `App` construction; nothing reads ambient globals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default GraphQL endpoint, proxied by the hosting server.
pub const DEFAULT_ENDPOINT: &str = "/api/graphql";

/// Default identity-provider client id; a deployment overrides this.
pub const DEFAULT_CLIENT_ID: &str = "authgate-dev";

/// Default identity-provider tenant domain; a deployment overrides this.
pub const DEFAULT_DOMAIN: &str = "authgate-dev.example.com";

/// Typed configuration handed to the app shell.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// GraphQL endpoint the auth mutations are posted to.
    pub endpoint: String,
    /// Identity-provider client id, passed to the login widget.
    pub client_id: String,
    /// Identity-provider tenant domain, passed to the login widget.
    pub domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            client_id: DEFAULT_CLIENT_ID.to_owned(),
            domain: DEFAULT_DOMAIN.to_owned(),
        }
    }
}
