//! Build-time endpoint configuration.
//!
//! The WASM bundle cannot read the process environment, so public settings
//! are captured with `option_env!` when the crate is compiled. The server
//! render compiles the same crate with the same environment, so both halves
//! agree on whether auth is configured.

use gateway::GatewayConfig;
use gateway::config::{API_URL_VAR, AUTH_ANON_KEY_VAR, AUTH_URL_VAR};

/// Gateway settings baked into this build.
pub fn gateway_config() -> GatewayConfig {
    GatewayConfig::from_lookup(build_env)
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_URL_VAR => option_env!("EXAM_PREP_API_URL"),
        AUTH_URL_VAR => option_env!("EXAM_PREP_AUTH_URL"),
        AUTH_ANON_KEY_VAR => option_env!("EXAM_PREP_AUTH_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}
