use super::*;

#[test]
fn default_config_uses_the_documented_constants() {
    let config = AppConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    assert_eq!(config.domain, DEFAULT_DOMAIN);
}
