//! Runtime configuration for the host process.
//!
//! The gateway settings are read with the same variable names the client
//! bundle is compiled with, so the server-side render and the browser agree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use gateway::GatewayConfig;

use crate::error::ServerError;

pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub gateway: GatewayConfig,
}

impl ServerConfig {
    /// Build config from a key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] if `PORT` is set but not a valid
    /// port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServerError::InvalidPort { value: raw.clone(), reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port, gateway: GatewayConfig::from_lookup(lookup) })
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
