use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Relational store configuration (SQLite connection pool)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://wrp.db?mode=rwc`
    pub url: String,
    /// Maximum number of pooled connections
    pub pool_size: u32,
    /// Time to wait for a free connection, in seconds
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABASE_URL: connection URL (defaults to `sqlite://wrp.db?mode=rwc`)
    /// - DATABASE_POOL_SIZE: pool size (defaults to 5)
    /// - DATABASE_CONNECTION_TIMEOUT: acquire timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading database configuration from environment variables");

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL not set, using default: sqlite://wrp.db?mode=rwc");
            "sqlite://wrp.db?mode=rwc".to_string()
        });
        debug!("Database URL: {}", url);

        let pool_size = env::var("DATABASE_POOL_SIZE")
            .unwrap_or_else(|_| {
                warn!("DATABASE_POOL_SIZE not set, using default: 5");
                "5".to_string()
            })
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid DATABASE_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid DATABASE_POOL_SIZE value".to_string())
            })?;
        debug!("Database pool size: {}", pool_size);

        let connection_timeout_secs = env::var("DATABASE_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("DATABASE_CONNECTION_TIMEOUT not set, using default: 5 seconds");
                "5".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid DATABASE_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid DATABASE_CONNECTION_TIMEOUT value".to_string())
            })?;
        debug!("Database connection timeout: {} seconds", connection_timeout_secs);

        let config = DatabaseConfig {
            url,
            pool_size,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("Database configuration loaded successfully");
        Ok(config)
    }

    /// In-memory database for tests. A single connection keeps every
    /// query on the same memory database.
    pub fn from_test_env() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            connection_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        info!("Validating database configuration");

        if self.url.is_empty() {
            error!("Database URL is empty");
            return Err(ConfigError::ValidationError("Database URL cannot be empty".to_string()));
        }

        if !self.url.starts_with("sqlite:") {
            error!("Unsupported database URL scheme");
            return Err(ConfigError::ValidationError("Database URL must use the sqlite: scheme".to_string()));
        }

        if self.pool_size == 0 {
            error!("Database pool size is 0");
            return Err(ConfigError::ValidationError("Database pool size must be greater than 0".to_string()));
        }

        if self.connection_timeout_secs == 0 {
            error!("Database connection timeout is 0");
            return Err(ConfigError::ValidationError("Database connection timeout must be greater than 0".to_string()));
        }

        info!("Database configuration validation successful");
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: "sqlite://wrp.db?mode=rwc".to_string(),
            pool_size: 5,
            connection_timeout_secs: 5,
        }
    }
}
