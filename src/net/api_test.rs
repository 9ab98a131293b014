use super::*;
use crate::net::types::{AccountRef, CreateAccountData, GqlError};

#[test]
fn create_account_variables_include_name_when_present() {
    let vars = create_account_variables("tok123", Some("Ada"));
    assert_eq!(vars, serde_json::json!({ "identityToken": "tok123", "name": "Ada" }));
}

#[test]
fn create_account_variables_omit_absent_name() {
    let vars = create_account_variables("tok123", None);
    assert_eq!(vars, serde_json::json!({ "identityToken": "tok123" }));
}

#[test]
fn establish_session_variables_carry_the_identity_token() {
    let vars = establish_session_variables("tok123");
    assert_eq!(vars, serde_json::json!({ "identityToken": "tok123" }));
}

#[test]
fn mutation_documents_name_their_operations() {
    assert!(CREATE_ACCOUNT_MUTATION.contains("mutation createAccount"));
    assert!(ESTABLISH_SESSION_MUTATION.contains("mutation establishSession"));
}

#[test]
fn resolve_envelope_returns_data_when_no_errors() {
    let envelope = GqlResponse {
        data: Some(CreateAccountData { create_account: AccountRef { id: "acc-1".to_owned() } }),
        errors: None,
    };
    let data = resolve_envelope(envelope).expect("data");
    assert_eq!(data.create_account.id, "acc-1");
}

#[test]
fn resolve_envelope_prefers_the_first_error() {
    let envelope: GqlResponse<CreateAccountData> = GqlResponse {
        data: None,
        errors: Some(vec![
            GqlError { code: Some(3023), message: "already exists".to_owned() },
            GqlError { code: Some(5000), message: "later".to_owned() },
        ]),
    };
    let err = resolve_envelope(envelope).expect_err("error");
    assert_eq!(err.code, Some(3023));
    assert_eq!(err.message, "already exists");
}

#[test]
fn resolve_envelope_errors_win_over_partial_data() {
    let envelope = GqlResponse {
        data: Some(CreateAccountData { create_account: AccountRef { id: "acc-1".to_owned() } }),
        errors: Some(vec![GqlError { code: Some(5000), message: "boom".to_owned() }]),
    };
    assert!(resolve_envelope(envelope).is_err());
}

#[test]
fn resolve_envelope_rejects_empty_envelope() {
    let envelope: GqlResponse<CreateAccountData> = GqlResponse { data: None, errors: None };
    let err = resolve_envelope(envelope).expect_err("error");
    assert_eq!(err.code, None);
    assert!(err.message.contains("missing data"));
}

#[test]
fn resolve_envelope_tolerates_empty_error_list() {
    let envelope = GqlResponse {
        data: Some(CreateAccountData { create_account: AccountRef { id: "acc-1".to_owned() } }),
        errors: Some(vec![]),
    };
    assert!(resolve_envelope(envelope).is_ok());
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "auth request failed: 502");
}

#[test]
fn cache_key_distinguishes_variables() {
    let a = cache_key("query q { me }", &serde_json::json!({ "id": 1 }));
    let b = cache_key("query q { me }", &serde_json::json!({ "id": 2 }));
    assert_ne!(a, b);
}
