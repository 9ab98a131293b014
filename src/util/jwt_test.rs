use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

#[test]
fn expires_at_reads_the_exp_claim() {
    let token = token_with_payload(&serde_json::json!({ "sub": "u1", "exp": 1_700_000_000 }));
    assert_eq!(expires_at(&token), Some(1_700_000_000));
}

#[test]
fn expires_at_is_none_without_an_exp_claim() {
    let token = token_with_payload(&serde_json::json!({ "sub": "u1" }));
    assert_eq!(expires_at(&token), None);
}

#[test]
fn expires_at_is_none_for_garbage_tokens() {
    assert_eq!(expires_at("not-a-jwt"), None);
    assert_eq!(expires_at(""), None);
    assert_eq!(expires_at("a.!!!.c"), None);
}

#[test]
fn token_is_live_strictly_before_exp() {
    let token = token_with_payload(&serde_json::json!({ "exp": 1000 }));
    assert!(!is_expired_at(&token, 999));
    assert!(is_expired_at(&token, 1000));
    assert!(is_expired_at(&token, 1001));
}

#[test]
fn malformed_tokens_fail_closed() {
    assert!(is_expired_at("not-a-jwt", 0));
    let no_exp = token_with_payload(&serde_json::json!({ "sub": "u1" }));
    assert!(is_expired_at(&no_exp, 0));
}
