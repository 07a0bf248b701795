//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ClientConfig, LogFormat};
use crate::config::validation::{validate_config, ValidationError};

pub const BASE_URL_ENV: &str = "FETCH_API_BASE_URL";
pub const INCLUDE_CREDENTIALS_ENV: &str = "FETCH_API_INCLUDE_CREDENTIALS";
pub const FOLLOW_REDIRECTS_ENV: &str = "FETCH_API_FOLLOW_REDIRECTS";
pub const REQUEST_TIMEOUT_ENV: &str = "FETCH_API_REQUEST_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV: &str = "FETCH_API_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "FETCH_API_LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay `FETCH_API_*` variables onto a configuration.
///
/// `lookup` resolves a variable name to its value; pass [`process_env`] to read
/// the real environment. The result is not re-validated.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BASE_URL_ENV) {
        config.api.base_url = url;
    }
    if let Some(raw) = lookup(INCLUDE_CREDENTIALS_ENV) {
        config.api.include_credentials = parse_bool(INCLUDE_CREDENTIALS_ENV, &raw)?;
    }
    if let Some(raw) = lookup(FOLLOW_REDIRECTS_ENV) {
        config.api.follow_redirects = parse_bool(FOLLOW_REDIRECTS_ENV, &raw)?;
    }
    if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
        let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Env {
            var: REQUEST_TIMEOUT_ENV,
            reason: e.to_string(),
        })?;
        config.timeouts.request_secs = Some(secs);
    }
    if let Some(level) = lookup(LOG_LEVEL_ENV) {
        config.observability.log_level = level;
    }
    if let Some(raw) = lookup(LOG_FORMAT_ENV) {
        config.observability.log_format = raw
            .parse::<LogFormat>()
            .map_err(|reason| ConfigError::Env { var: LOG_FORMAT_ENV, reason })?;
    }

    Ok(config)
}

/// Environment lookup backed by the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Env {
            var,
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
