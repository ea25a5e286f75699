mod config;
mod error;
mod logging;
mod probe;
mod routes;

use std::time::Duration;

use gateway::BackendClient;
use gateway::native::ReqwestTransport;

use crate::config::ServerConfig;
use crate::error::ServerError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    logging::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "exam-prep server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    if config.gateway.auth.is_configured() {
        tracing::info!("auth provider configured");
    } else {
        tracing::warn!("auth provider not configured; login is disabled and the workspace is open");
    }

    let http = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|e| ServerError::Http(e.to_string()))?;
    let backend = BackendClient::new(ReqwestTransport::new(http), &config.gateway.backend_url);
    probe::log_backend_status(&backend).await;

    let app = routes::leptos_app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, backend = %config.gateway.backend_url, "exam-prep listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
