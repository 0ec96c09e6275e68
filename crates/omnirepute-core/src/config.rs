use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The lookup indirection keeps parsing and validation testable with a plain
/// `HashMap` — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let warehouse_base_url = require("WAREHOUSE_BASE_URL")?;
    let warehouse_project_id = require("WAREHOUSE_PROJECT_ID")?;
    let warehouse_api_token = lookup("WAREHOUSE_API_TOKEN").ok();

    let env = parse_environment(&or_default("OMNIREPUTE_ENV", "development"));
    let bind_addr = parse_addr("OMNIREPUTE_BIND_ADDR", "0.0.0.0:3001")?;
    let log_level = or_default("OMNIREPUTE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("OMNIREPUTE_REQUEST_TIMEOUT_SECS", "30")?;

    let gemini_api_key = lookup("GEMINI_API_KEY").ok();
    let gemini_base_url = lookup("GEMINI_BASE_URL").ok();
    let gemini_model = or_default("GEMINI_MODEL", "gemini-2.0-flash");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        warehouse_base_url,
        warehouse_project_id,
        warehouse_api_token,
        request_timeout_secs,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
