use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::MockTransport;
use crate::transport::{HttpMethod, RequestBody};

const AUTH_URL: &str = "https://auth.example.test";
/// 2100-01-01T00:00:00Z
const FAR_FUTURE: i64 = 4_102_444_800;

fn configured() -> AuthConfig {
    AuthConfig::new(Some(AUTH_URL), "anon-key")
}

fn alice(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "tok-1".to_owned(),
        refresh_token: "ref-1".to_owned(),
        expires_at,
        user: Identity { id: "u1".to_owned(), email: Some("alice@example.com".to_owned()) },
    }
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "tok-new",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "ref-new",
        "user": {"id": "u1", "email": "alice@example.com", "aud": "authenticated"}
    })
}

// =============================================================
// Unconfigured mode
// =============================================================

#[test]
fn sign_in_unconfigured_makes_no_request() {
    let mock = MockTransport::new();
    let client = AuthClient::new(&mock, MemorySessionStore::new(), AuthConfig::unconfigured());

    let err = block_on(client.sign_in_with_password("a@b.com", "pw")).unwrap_err();
    assert!(matches!(err, GatewayError::NotConfigured));
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn sign_up_unconfigured_makes_no_request() {
    let mock = MockTransport::new();
    let client = AuthClient::new(&mock, MemorySessionStore::new(), AuthConfig::unconfigured());

    let err = block_on(client.sign_up("a@b.com", "pw", None)).unwrap_err();
    assert!(matches!(err, GatewayError::NotConfigured));
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn get_session_unconfigured_is_none_without_request() {
    let mock = MockTransport::new();
    let store = MemorySessionStore::with_session(alice(Some(FAR_FUTURE)));
    let client = AuthClient::new(&mock, store, AuthConfig::unconfigured());

    assert_eq!(block_on(client.get_session()).unwrap(), None);
    assert_eq!(mock.request_count(), 0);
}

// =============================================================
// Sign in / sign up
// =============================================================

#[test]
fn sign_in_posts_password_grant_and_persists_session() {
    let mock = MockTransport::new();
    mock.reply_json(200, &token_body());
    let store = Rc::new(MemorySessionStore::new());
    let client = AuthClient::new(&mock, store.clone(), configured());

    let session = block_on(client.sign_in_with_password("alice@example.com", "secret")).unwrap();
    assert_eq!(session.access_token, "tok-new");
    assert!(session.expires_at.is_some());
    assert_eq!(store.load(), Some(session));

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://auth.example.test/auth/v1/token?grant_type=password");
    assert_eq!(request.header_value("apikey"), Some("anon-key"));
    assert_eq!(request.header_value("authorization"), Some("Bearer anon-key"));
    assert_eq!(request.body, RequestBody::Json(json!({"email": "alice@example.com", "password": "secret"})));
}

#[test]
fn sign_in_rejection_surfaces_provider_message() {
    let mock = MockTransport::new();
    mock.reply_json(400, &json!({"error": "invalid_grant", "error_description": "Invalid login credentials"}));
    let client = AuthClient::new(&mock, MemorySessionStore::new(), configured());

    let err = block_on(client.sign_in_with_password("a@b.com", "bad")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid login credentials");
    assert!(matches!(err, GatewayError::Auth { status: 400, .. }));
}

#[test]
fn sign_in_rejection_without_message_has_empty_text() {
    let mock = MockTransport::new();
    mock.reply(500, "upstream exploded");
    let client = AuthClient::new(&mock, MemorySessionStore::new(), configured());

    let err = block_on(client.sign_in_with_password("a@b.com", "pw")).unwrap_err();
    assert_eq!(err.to_string(), "");
}

#[test]
fn sign_up_without_session_means_confirmation_sent() {
    let mock = MockTransport::new();
    mock.reply_json(200, &json!({"id": "u2", "email": "bob@example.com", "confirmation_sent_at": "2026-01-01T00:00:00Z"}));
    let store = Rc::new(MemorySessionStore::new());
    let client = AuthClient::new(&mock, store.clone(), configured());

    let outcome = block_on(client.sign_up("bob@example.com", "pw", Some("http://localhost:3000/"))).unwrap();
    assert_eq!(outcome, SignUpOutcome::ConfirmationSent);
    assert_eq!(store.load(), None);

    let request = mock.last_request().unwrap();
    assert_eq!(
        request.url,
        "https://auth.example.test/auth/v1/signup?redirect_to=http%3A%2F%2Flocalhost%3A3000%2F"
    );
}

#[test]
fn sign_up_autoconfirmed_persists_session() {
    let mock = MockTransport::new();
    mock.reply_json(200, &token_body());
    let store = Rc::new(MemorySessionStore::new());
    let client = AuthClient::new(&mock, store.clone(), configured());

    let outcome = block_on(client.sign_up("alice@example.com", "pw", None)).unwrap();
    assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));
    assert!(store.load().is_some());
    assert_eq!(mock.last_request().unwrap().url, "https://auth.example.test/auth/v1/signup");
}

#[test]
fn sign_up_rejection_uses_msg_key() {
    let mock = MockTransport::new();
    mock.reply_json(422, &json!({"code": 422, "msg": "Password should be at least 6 characters"}));
    let client = AuthClient::new(&mock, MemorySessionStore::new(), configured());

    let err = block_on(client.sign_up("a@b.com", "pw", None)).unwrap_err();
    assert_eq!(err.to_string(), "Password should be at least 6 characters");
}

// =============================================================
// Session resolution
// =============================================================

#[test]
fn get_session_without_stored_session_is_none() {
    let mock = MockTransport::new();
    let client = AuthClient::new(&mock, MemorySessionStore::new(), configured());

    assert_eq!(block_on(client.get_session()).unwrap(), None);
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn get_session_expired_without_refresh_token_is_cleared_without_request() {
    let mock = MockTransport::new();
    let expired = Session { refresh_token: String::new(), ..alice(Some(1)) };
    let store = Rc::new(MemorySessionStore::with_session(expired));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert_eq!(block_on(client.get_session()).unwrap(), None);
    assert_eq!(store.load(), None);
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn get_session_expired_is_renewed_with_refresh_token() {
    let mock = MockTransport::new();
    mock.reply_json(200, &token_body());
    let store = Rc::new(MemorySessionStore::with_session(alice(Some(1))));
    let client = AuthClient::new(&mock, store.clone(), configured());

    let session = block_on(client.get_session()).unwrap().unwrap();
    assert_eq!(session.access_token, "tok-new");
    assert_eq!(session.refresh_token, "ref-new");
    assert!(!session.is_expired_at(now_unix()));
    assert_eq!(store.load(), Some(session));

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://auth.example.test/auth/v1/token?grant_type=refresh_token");
    assert_eq!(request.body, RequestBody::Json(json!({"refresh_token": "ref-1"})));
    assert_eq!(request.header_value("apikey"), Some("anon-key"));
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn get_session_rejected_refresh_token_is_cleared() {
    let mock = MockTransport::new();
    mock.reply_json(400, &json!({"error": "invalid_grant", "error_description": "Refresh Token Not Found"}));
    let store = Rc::new(MemorySessionStore::with_session(alice(Some(1))));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert_eq!(block_on(client.get_session()).unwrap(), None);
    assert_eq!(store.load(), None);
}

#[test]
fn get_session_refresh_transport_failure_keeps_stored_session() {
    let mock = MockTransport::new();
    mock.fail("offline");
    let store = Rc::new(MemorySessionStore::with_session(alice(Some(1))));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert!(block_on(client.get_session()).is_err());
    assert!(store.load().is_some());
}

#[test]
fn get_session_confirms_identity_with_bearer_token() {
    let mock = MockTransport::new();
    mock.reply_json(200, &json!({"id": "u1", "email": "alice@new.example.com"}));
    let store = Rc::new(MemorySessionStore::with_session(alice(Some(FAR_FUTURE))));
    let client = AuthClient::new(&mock, store.clone(), configured());

    let session = block_on(client.get_session()).unwrap().unwrap();
    assert_eq!(session.user.email.as_deref(), Some("alice@new.example.com"));
    assert_eq!(session.access_token, "tok-1");
    assert_eq!(store.load(), Some(session));

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://auth.example.test/auth/v1/user");
    assert_eq!(request.header_value("authorization"), Some("Bearer tok-1"));
}

#[test]
fn get_session_rejected_token_is_cleared() {
    let mock = MockTransport::new();
    mock.reply_json(401, &json!({"msg": "invalid JWT"}));
    let store = Rc::new(MemorySessionStore::with_session(alice(None)));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert_eq!(block_on(client.get_session()).unwrap(), None);
    assert_eq!(store.load(), None);
}

#[test]
fn get_session_transport_failure_keeps_stored_session() {
    let mock = MockTransport::new();
    mock.fail("offline");
    let store = Rc::new(MemorySessionStore::with_session(alice(None)));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert!(block_on(client.get_session()).is_err());
    assert!(store.load().is_some());
}

// =============================================================
// Sign out
// =============================================================

#[test]
fn sign_out_posts_logout_and_clears_store() {
    let mock = MockTransport::new();
    mock.reply(204, "");
    let store = Rc::new(MemorySessionStore::with_session(alice(None)));
    let client = AuthClient::new(&mock, store.clone(), configured());

    block_on(client.sign_out()).unwrap();
    assert_eq!(store.load(), None);
    let request = mock.last_request().unwrap();
    assert_eq!(request.url, "https://auth.example.test/auth/v1/logout");
    assert_eq!(request.header_value("authorization"), Some("Bearer tok-1"));
}

#[test]
fn sign_out_clears_store_even_when_provider_fails() {
    let mock = MockTransport::new();
    mock.fail("offline");
    let store = Rc::new(MemorySessionStore::with_session(alice(None)));
    let client = AuthClient::new(&mock, store.clone(), configured());

    assert!(block_on(client.sign_out()).is_err());
    assert_eq!(store.load(), None);
}

#[test]
fn sign_out_without_session_skips_network() {
    let mock = MockTransport::new();
    let client = AuthClient::new(&mock, MemorySessionStore::new(), configured());

    block_on(client.sign_out()).unwrap();
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn session_expiry_boundary() {
    let session = alice(Some(100));
    assert!(!session.is_expired_at(99));
    assert!(session.is_expired_at(100));
    assert!(!alice(None).is_expired_at(i64::MAX));
}
