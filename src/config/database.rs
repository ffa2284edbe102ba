//! Database configuration module.
//!
//! Resolves the connection URL and opens the `SeaORM` connection used by the repository
//! adapter. Schema creation lives in [`crate::migration`].

use crate::config::settings::AppConfig;
use crate::errors::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::{path::Path, time::Duration};
use tracing::debug;

/// Default `SQLite` file used when neither the environment nor `config.toml` names one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/koi_delivery.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, then the
/// configuration file, then the built-in default.
#[must_use]
pub fn get_database_url(config: &AppConfig) -> String {
    std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| config.database_url.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `url`.
///
/// Connect and acquire timeouts come from `operation_timeout_secs`, so a store that
/// never answers fails the startup reachability check instead of hanging it.
pub async fn create_connection(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {url}");
    let timeout = Duration::from_secs(config.operation_timeout_secs);

    let mut options = ConnectOptions::new(url.to_owned());
    options
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    Database::connect(options).await.map_err(Into::into)
}

/// Creates the directory holding a file-backed `SQLite` database, if the URL names one.
pub fn ensure_sqlite_parent_dir(url: &str) -> Result<()> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or_default();
    if let Some(parent) = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:", &AppConfig::default()).await?;
        db.ping().await?;
        assert_eq!(db.get_database_backend(), sea_orm::DatabaseBackend::Sqlite);
        Ok(())
    }

    #[test]
    fn test_parent_dir_ignores_memory_urls() -> Result<()> {
        ensure_sqlite_parent_dir("sqlite::memory:")?;
        ensure_sqlite_parent_dir("sqlite://koi.sqlite?mode=rwc")?;
        Ok(())
    }

    #[test]
    fn test_database_url_falls_back_to_config() {
        let config = AppConfig {
            database_url: Some("sqlite://from_config.sqlite".to_string()),
            ..AppConfig::default()
        };
        // DATABASE_URL, when exported, wins over the file.
        let expected = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://from_config.sqlite".to_string());
        assert_eq!(get_database_url(&config), expected);
    }
}
