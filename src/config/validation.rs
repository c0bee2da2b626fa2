//! Configuration validation

use super::*;
use crate::error::{ClientError, Result};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client_config(&config.client)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate client connection configuration
fn validate_client_config(config: &ClientConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ClientError::Config(
            "Service URL cannot be empty".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.url)
        .map_err(|e| ClientError::Config(format!("Invalid service URL '{}': {}", config.url, e)))?;

    match parsed.scheme() {
        "https" => {}
        "http" if !config.tls_enabled => {}
        "http" => {
            return Err(ClientError::Config(
                "Service URL must use https:// when TLS is enabled".to_string()
            ));
        }
        other => {
            return Err(ClientError::Config(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                other
            )));
        }
    }

    if config.timeout_secs == 0 {
        return Err(ClientError::Config(
            "Client timeout must be greater than 0".to_string()
        ));
    }

    if config.timeout_secs > 300 {
        return Err(ClientError::Config(
            "Client timeout too large (max: 300 seconds)".to_string()
        ));
    }

    if config.pool_max_idle_per_host > 1000 {
        return Err(ClientError::Config(
            "Connection pool too large (max: 1000 idle connections per host)".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(ClientError::Config(format!(
            "Invalid log level '{}' (expected one of: {})",
            config.level,
            valid_levels.join(", ")
        )));
    }

    let valid_formats = ["json", "compact", "pretty"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(ClientError::Config(format!(
            "Invalid log format '{}' (expected one of: {})",
            config.format,
            valid_formats.join(", ")
        )));
    }

    Ok(())
}
