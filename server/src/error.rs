//! Start-up and serve errors for the host binary.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("http client setup failed: {0}")]
    Http(String),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
