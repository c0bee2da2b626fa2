//! Logging and tracing setup for applications embedding the client

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging and tracing
///
/// `RUST_LOG` takes precedence over `log_level` when set. Returns an error
/// if a global subscriber is already installed.
pub fn init_observability(log_level: &str, format: &str) -> crate::error::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    result.map_err(|e| crate::error::ClientError::Config(format!("Failed to install subscriber: {}", e)))
}

/// Initialize logging from a [`LoggingConfig`]
pub fn init_from_config(config: &LoggingConfig) -> crate::error::Result<()> {
    init_observability(&config.level, &config.format)
}
