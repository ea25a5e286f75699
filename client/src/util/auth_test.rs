use gateway::Identity;

use super::*;

fn signed_in() -> AuthState {
    AuthState {
        identity: Some(Identity { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()) }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_identity_missing() {
    let state = AuthState { identity: None, loading: false };
    assert!(should_redirect_unauth(&state, true));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { identity: None, loading: true };
    assert!(!should_redirect_unauth(&state, true));
}

#[test]
fn should_not_redirect_when_identity_exists() {
    assert!(!should_redirect_unauth(&signed_in(), true));
}

#[test]
fn should_not_redirect_when_auth_unconfigured() {
    let state = AuthState { identity: None, loading: false };
    assert!(!should_redirect_unauth(&state, false));
}
