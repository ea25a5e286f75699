//! One-shot backend reachability check at start-up.
//!
//! The host never depends on the backend; the probe only tells the operator
//! whether the browser will be able to reach it.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use gateway::questions::display_value;
use gateway::{BackendClient, Transport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    /// `GET /` answered; carries the backend's `message` text.
    Reachable(String),
    Unreachable(String),
}

pub async fn check_backend<T: Transport>(backend: &BackendClient<T>) -> BackendStatus {
    match backend.status().await {
        Ok(body) => BackendStatus::Reachable(body.get("message").map(display_value).unwrap_or_default()),
        Err(e) => BackendStatus::Unreachable(e.to_string()),
    }
}

pub async fn log_backend_status<T: Transport>(backend: &BackendClient<T>) -> BackendStatus {
    let status = check_backend(backend).await;
    match &status {
        BackendStatus::Reachable(message) => {
            tracing::info!(backend = backend.base_url(), %message, "backend reachable");
        }
        BackendStatus::Unreachable(reason) => {
            tracing::warn!(backend = backend.base_url(), %reason, "backend unreachable; generation will fail until it is up");
        }
    }
    status
}
