//! Email/password client for the hosted auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Speaks the provider's REST surface (`/auth/v1/signup`, `/auth/v1/token`,
//! `/auth/v1/user`, `/auth/v1/logout`) and keeps the signed-in session in a
//! pluggable [`SessionStore`] so a full-page redirect after sign-in still
//! finds it.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections become [`GatewayError::Auth`] carrying the provider's
//! own message text. When the provider is unconfigured nothing touches the
//! network.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::AuthConfig;
use crate::error::GatewayError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Key under which browser storage keeps the serialized session.
pub const SESSION_STORAGE_KEY: &str = "exam-prep.auth.session";

/// The signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix seconds after which the access token is no longer valid.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: Identity,
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_unix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider sent a confirmation email; no session yet.
    ConfirmationSent,
    /// The provider auto-confirmed and returned a session.
    SignedIn(Session),
}

/// Persistence slot for the current session.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

impl<S: SessionStore> SessionStore for Rc<S> {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) {
        (**self).save(session);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory session slot.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { slot: RefCell::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Token grant payload returned by sign-in and auto-confirmed sign-up.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: Identity,
}

impl TokenResponse {
    fn into_session(self, now_unix: i64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_unix + secs));
        Session { access_token: self.access_token, refresh_token: self.refresh_token, expires_at, user: self.user }
    }
}

pub struct AuthClient<T, S> {
    transport: T,
    store: S,
    config: AuthConfig,
}

impl<T: Transport, S: SessionStore> AuthClient<T, S> {
    pub fn new(transport: T, store: S, config: AuthConfig) -> Self {
        Self { transport, store, config }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Register a new account.
    ///
    /// `redirect_to` is where the confirmation link should land.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] without a network call when
    /// the provider is unconfigured, [`GatewayError::Auth`] when the provider
    /// rejects the request, or transport/parse errors.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: Option<&str>,
    ) -> Result<SignUpOutcome, GatewayError> {
        let base = self.base_url()?;
        let mut url = format!("{base}/auth/v1/signup");
        if let Some(target) = redirect_to {
            url = with_query(&url, &[("redirect_to", target)])?;
        }
        let request = self
            .authorized(HttpRequest::post(url), None)
            .json(json!({ "email": email, "password": password }));
        let body = expect_success(self.transport.send(request).await?)?;

        if body.get("access_token").is_some() {
            let session = parse_token(body)?;
            self.store.save(&session);
            return Ok(SignUpOutcome::SignedIn(session));
        }
        Ok(SignUpOutcome::ConfirmationSent)
    }

    /// Sign in with email and password and persist the session.
    ///
    /// # Errors
    ///
    /// See [`AuthClient::sign_up`].
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, GatewayError> {
        let base = self.base_url()?;
        let url = with_query(&format!("{base}/auth/v1/token"), &[("grant_type", "password")])?;
        let request = self
            .authorized(HttpRequest::post(url), None)
            .json(json!({ "email": email, "password": password }));
        let body = expect_success(self.transport.send(request).await?)?;
        let session = parse_token(body)?;
        self.store.save(&session);
        log::debug!("signed in as {}", session.user.id);
        Ok(session)
    }

    /// Resolve the stored session, confirming it with the provider.
    ///
    /// An expired session is renewed with its refresh token. Sessions the
    /// provider rejects are cleared and yield `None`.
    ///
    /// # Errors
    ///
    /// Transport failures and unexpected provider responses are returned; the
    /// stored session is kept in that case.
    pub async fn get_session(&self) -> Result<Option<Session>, GatewayError> {
        let Some(base) = self.config.url.as_deref() else {
            return Ok(None);
        };
        let Some(session) = self.store.load() else {
            return Ok(None);
        };
        if session.is_expired_at(now_unix()) {
            return self.refresh(base, &session).await;
        }

        let request = self.authorized(HttpRequest::get(format!("{base}/auth/v1/user")), Some(&session.access_token));
        let response = self.transport.send(request).await?;
        if matches!(response.status, 401 | 403) {
            log::info!("stored session rejected by provider; clearing");
            self.store.clear();
            return Ok(None);
        }
        let body = expect_success(response)?;
        let user: Identity = serde_json::from_value(body).map_err(|e| GatewayError::Parse(e.to_string()))?;
        let refreshed = Session { user, ..session };
        self.store.save(&refreshed);
        Ok(Some(refreshed))
    }

    /// Trade the refresh token of an expired session for a new one.
    ///
    /// A missing or rejected refresh token clears the store and yields `None`.
    async fn refresh(&self, base: &str, expired: &Session) -> Result<Option<Session>, GatewayError> {
        if expired.refresh_token.is_empty() {
            log::info!("stored session expired without refresh token; clearing");
            self.store.clear();
            return Ok(None);
        }
        let url = with_query(&format!("{base}/auth/v1/token"), &[("grant_type", "refresh_token")])?;
        let request = self
            .authorized(HttpRequest::post(url), None)
            .json(json!({ "refresh_token": expired.refresh_token }));
        let response = self.transport.send(request).await?;
        if (400..500).contains(&response.status) {
            log::info!("refresh token rejected by provider; clearing");
            self.store.clear();
            return Ok(None);
        }
        let session = parse_token(expect_success(response)?)?;
        self.store.save(&session);
        log::debug!("refreshed session for {}", session.user.id);
        Ok(Some(session))
    }

    /// End the session. Local state is cleared even if the provider call fails.
    ///
    /// # Errors
    ///
    /// Returns the provider/transport error from the logout call, after the
    /// local session has already been cleared.
    pub async fn sign_out(&self) -> Result<(), GatewayError> {
        let stored = self.store.load();
        self.store.clear();
        let (Some(base), Some(session)) = (self.config.url.as_deref(), stored) else {
            return Ok(());
        };
        let request = self.authorized(
            HttpRequest::post(format!("{base}/auth/v1/logout")),
            Some(&session.access_token),
        );
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(auth_error(&response));
        }
        Ok(())
    }

    fn base_url(&self) -> Result<&str, GatewayError> {
        self.config.url.as_deref().ok_or(GatewayError::NotConfigured)
    }

    fn authorized(&self, request: HttpRequest, access_token: Option<&str>) -> HttpRequest {
        let bearer = access_token.unwrap_or(self.config.anon_key.as_str());
        request
            .header("apikey", self.config.anon_key.clone())
            .header("Authorization", format!("Bearer {bearer}"))
    }
}

fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

fn with_query(url: &str, params: &[(&str, &str)]) -> Result<String, GatewayError> {
    url::Url::parse_with_params(url, params)
        .map(String::from)
        .map_err(|e| GatewayError::Transport(format!("invalid auth URL: {e}")))
}

fn parse_token(body: Value) -> Result<Session, GatewayError> {
    let token: TokenResponse = serde_json::from_value(body).map_err(|e| GatewayError::Parse(e.to_string()))?;
    Ok(token.into_session(now_unix()))
}

fn expect_success(response: HttpResponse) -> Result<Value, GatewayError> {
    if !response.is_success() {
        return Err(auth_error(&response));
    }
    response.json()
}

/// Build an [`GatewayError::Auth`] from a provider error body.
///
/// The provider reports messages under different keys depending on the
/// endpoint; the first non-empty of `msg`, `message`, `error_description`,
/// `error` wins.
fn auth_error(response: &HttpResponse) -> GatewayError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| body.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_owned))
        })
        .unwrap_or_default();
    GatewayError::Auth { status: response.status, message }
}
