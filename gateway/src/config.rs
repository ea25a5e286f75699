//! Endpoint configuration for the backend and the auth provider.
//!
//! Values come from a key lookup so the browser build can feed compile-time
//! constants and the server can feed process environment through the same
//! parser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_VAR: &str = "EXAM_PREP_API_URL";
pub const AUTH_URL_VAR: &str = "EXAM_PREP_AUTH_URL";
pub const AUTH_ANON_KEY_VAR: &str = "EXAM_PREP_AUTH_ANON_KEY";

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Auth URL shipped in sample env files; treated the same as unset.
pub const PLACEHOLDER_AUTH_URL: &str = "https://placeholder.supabase.co";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Provider base URL without trailing `/`, or `None` when unconfigured.
    pub url: Option<String>,
    pub anon_key: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(url: Option<&str>, anon_key: &str) -> Self {
        let url = url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty() && *u != PLACEHOLDER_AUTH_URL)
            .map(str::to_owned);
        Self { url, anon_key: anon_key.trim().to_owned() }
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self { url: None, anon_key: String::new() }
    }

    /// False when the provider URL is missing or the placeholder.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Backend base URL without trailing `/`.
    pub backend_url: String,
    pub auth: AuthConfig,
}

impl GatewayConfig {
    /// Build config from a key lookup.
    ///
    /// - `EXAM_PREP_API_URL`: backend base URL (default `http://127.0.0.1:8000`)
    /// - `EXAM_PREP_AUTH_URL`: auth provider base URL (unset => unconfigured)
    /// - `EXAM_PREP_AUTH_ANON_KEY`: public provider key
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let auth = AuthConfig::new(
            lookup(AUTH_URL_VAR).as_deref(),
            lookup(AUTH_ANON_KEY_VAR).as_deref().unwrap_or_default(),
        );
        Self { backend_url, auth }
    }

    /// Build config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
