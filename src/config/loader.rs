//! Configuration loader with environment variable support

use super::Config;
use crate::error::Result;
use config::{Environment, File};
use std::path::Path;

/// Prefix for environment overrides, e.g. `DOCSEARCH__CLIENT__URL`
pub const ENV_PREFIX: &str = "DOCSEARCH";

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Load configuration from a TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("docsearch-{}-{}.toml", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let path = write_config("defaults", "[client]\nurl = \"http://search:9200\"\n");

        let config = load_config(&path).unwrap();
        assert_eq!(config.client.url, "http://search:9200");
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.client.pool_max_idle_per_host, 10);
        assert!(!config.client.tls_enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/docsearch.toml");
        assert!(result.is_err());
    }
}
