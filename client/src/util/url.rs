//! Public base URL of the running site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-up passes this URL to the auth provider as the confirmation-email
//! landing page, so it must be absolute and end with `/` when it comes from
//! configuration.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Site-specific public URL, checked first when no window is available.
pub const SITE_URL_VAR: &str = "SITE_URL";
/// Hosting-platform deployment URL, often given without a scheme.
pub const DEPLOYMENT_URL_VAR: &str = "DEPLOYMENT_URL";
pub const FALLBACK_BASE_URL: &str = "http://localhost:3000/";

/// The browser origin when running in a window, otherwise the configured
/// site URL.
pub fn resolve_base_url() -> String {
    resolve_base_url_from(window_origin(), env_value(SITE_URL_VAR), env_value(DEPLOYMENT_URL_VAR))
}

/// Pick and normalize a base URL.
///
/// `origin` is returned verbatim. Otherwise the first non-empty candidate is
/// given an `https://` scheme if it has none and exactly one trailing `/`.
pub fn resolve_base_url_from(origin: Option<String>, site_url: Option<String>, deployment_url: Option<String>) -> String {
    if let Some(origin) = origin {
        return origin;
    }
    let url = [site_url, deployment_url]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_owned());

    let url = if url.contains("://") { url } else { format!("https://{url}") };
    format!("{}/", url.trim_end_matches('/'))
}

fn window_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn env_value(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let _ = key;
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::env::var(key).ok()
    }
}
