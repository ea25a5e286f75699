//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. When
//! the auth provider is unconfigured the guard is skipped so the workspace
//! stays usable in local development.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gateway::Navigator;
use leptos::prelude::*;

use crate::state::auth::AuthState;

pub const LOGIN_LOCATION: &str = "/login";

/// Whether a protected page should send the user to `/login`.
pub fn should_redirect_unauth(state: &AuthState, auth_configured: bool) -> bool {
    auth_configured && !state.loading && state.identity.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<N>(auth: RwSignal<AuthState>, auth_configured: bool, navigator: N)
where
    N: Navigator + 'static,
{
    if !auth_configured {
        return;
    }
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state, auth_configured) {
            navigator.redirect(LOGIN_LOCATION);
        }
    });
}
