//! Error type for backend and auth-provider calls.

/// Errors produced by gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request failed before any response body was available.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON, or not the JSON shape expected.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The auth provider rejected the call. `message` is the provider's text.
    #[error("{message}")]
    Auth { status: u16, message: String },

    /// The auth provider address is unset or still the placeholder.
    #[error("auth provider is not configured")]
    NotConfigured,

    /// A local file could not be read for upload.
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// True for failures where no HTTP response was received at all.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
