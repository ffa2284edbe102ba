//! Application settings loaded from `config.toml`.
//!
//! Every field has a default, so a missing file yields a usable configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Price charged per kilogram of shipped goods when no configuration overrides it.
pub const DEFAULT_PRICE_PER_KILOGRAM: f64 = 7000.0;

/// Deadline applied to store calls when no configuration overrides it.
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database URL; the `DATABASE_URL` environment variable takes precedence
    pub database_url: Option<String>,
    /// Price per kilogram used to estimate document line prices
    pub price_per_kilogram: f64,
    /// Deadline for a single store call, in seconds
    pub operation_timeout_secs: u64,
    /// Seed fixture file; the bundled fixtures are used when absent
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            price_per_kilogram: DEFAULT_PRICE_PER_KILOGRAM,
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            seed_file: None,
        }
    }
}

impl AppConfig {
    fn validate(self) -> Result<Self> {
        if !self.price_per_kilogram.is_finite() || self.price_per_kilogram < 0.0 {
            return Err(Error::Config {
                message: format!(
                    "price_per_kilogram must be a non-negative number, got {}",
                    self.price_per_kilogram
                ),
            });
        }
        if self.operation_timeout_secs == 0 {
            return Err(Error::Config {
                message: "operation_timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}

/// Parses and validates configuration from a TOML string.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or a value is out of range.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    config.validate()
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A value is out of range
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads configuration from `./config.toml`, falling back to defaults when the file
/// does not exist.
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_config(path)
    } else {
        tracing::info!("No config.toml found, using default configuration");
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            database_url = "sqlite::memory:"
            price_per_kilogram = 8500.0
            operation_timeout_secs = 5
            seed_file = "fixtures/seed.toml"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));
        assert_eq!(config.price_per_kilogram, 8500.0);
        assert_eq!(config.operation_timeout_secs, 5);
        assert_eq!(config.seed_file, Some(PathBuf::from("fixtures/seed.toml")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.price_per_kilogram, DEFAULT_PRICE_PER_KILOGRAM);
        assert_eq!(config.operation_timeout_secs, DEFAULT_OPERATION_TIMEOUT_SECS);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = parse_config("price_per_kilogram = -1.0");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = parse_config("operation_timeout_secs = 0");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
