//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the gateway [`SessionProvider`]'s published state into a reactive
//! value that route guards and the workspace header read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gateway::{Identity, SessionProvider, SessionState, SessionStore, SubscriptionId, Transport};

use super::Store;

/// Current identity and whether the initial session check is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from(&SessionState::Resolving)
    }
}

impl From<&SessionState> for AuthState {
    fn from(state: &SessionState) -> Self {
        Self { identity: state.identity().cloned(), loading: state.is_resolving() }
    }
}

impl AuthState {
    /// Email of the signed-in user, empty when unknown.
    pub fn email(&self) -> &str {
        self.identity.as_ref().and_then(|i| i.email.as_deref()).unwrap_or_default()
    }
}

/// Copy the provider's current state into `sink` and keep it in sync.
pub fn mirror_session<T, S, K>(provider: &SessionProvider<T, S>, sink: K) -> SubscriptionId
where
    T: Transport,
    S: SessionStore,
    K: Store<AuthState> + 'static,
{
    let current = AuthState::from(&provider.current());
    sink.mutate(|s| *s = current);
    provider.subscribe(move |state| {
        let next = AuthState::from(state);
        sink.mutate(|s| *s = next);
    })
}
