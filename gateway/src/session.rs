//! Session state broadcast and the provider that owns it.
//!
//! DESIGN
//! ======
//! [`SessionSubject`] is an explicit publish/subscribe object: the provider
//! publishes every transition and dependents (route guards, header widgets)
//! subscribe instead of polling. The UI runs on one thread, so subscribers
//! are plain `Rc` callbacks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::auth::{AuthClient, Identity, SessionStore};
use crate::transport::Transport;

/// Where sign-out sends the browser.
pub const AFTER_SIGN_OUT_LOCATION: &str = "/login";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Initial state until the stored session has been checked.
    #[default]
    Resolving,
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Resolving | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

/// Full-page navigation, as opposed to client-side routing.
pub trait Navigator {
    fn redirect(&self, location: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&SessionState)>;

#[derive(Default)]
pub struct SessionSubject {
    state: RefCell<SessionState>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl SessionSubject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Register `callback`; it is invoked on every later publish.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Store `state` and notify subscribers in subscription order.
    pub fn publish(&self, state: SessionState) {
        *self.state.borrow_mut() = state.clone();
        // Snapshot so callbacks may subscribe/unsubscribe re-entrantly.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in subscribers {
            callback(&state);
        }
    }
}

/// Owns the session lifecycle: `Resolving` -> `Authenticated` | `Unauthenticated`.
pub struct SessionProvider<T, S> {
    auth: AuthClient<T, S>,
    subject: SessionSubject,
}

impl<T: Transport, S: SessionStore> SessionProvider<T, S> {
    pub fn new(auth: AuthClient<T, S>) -> Self {
        Self { auth, subject: SessionSubject::new() }
    }

    /// The underlying auth client, for direct sign-in/sign-up calls.
    pub fn auth(&self) -> &AuthClient<T, S> {
        &self.auth
    }

    pub fn subject(&self) -> &SessionSubject {
        &self.subject
    }

    pub fn current(&self) -> SessionState {
        self.subject.current()
    }

    pub fn is_resolving(&self) -> bool {
        self.subject.current().is_resolving()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.subject.current().identity().cloned()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + 'static,
    {
        self.subject.subscribe(callback)
    }

    /// Resolve the stored session and publish the result.
    pub async fn initialize(&self) -> SessionState {
        let state = match self.auth.get_session().await {
            Ok(Some(session)) => SessionState::Authenticated(session.user),
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                log::warn!("session check failed: {e}");
                SessionState::Unauthenticated
            }
        };
        self.subject.publish(state.clone());
        state
    }

    /// Clear the session, tell every subscriber, then leave the page.
    pub async fn sign_out<N: Navigator>(&self, navigator: &N) {
        if let Err(e) = self.auth.sign_out().await {
            log::warn!("provider sign-out failed: {e}");
        }
        self.subject.publish(SessionState::Unauthenticated);
        navigator.redirect(AFTER_SIGN_OUT_LOCATION);
    }
}
