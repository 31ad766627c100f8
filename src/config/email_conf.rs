use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// SMTP relay settings used by the notification mailer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username, if the relay requires authentication
    pub smtp_username: Option<String>,
    /// SMTP password, if the relay requires authentication
    pub smtp_password: Option<String>,
    /// Whether to use TLS encryption
    pub use_tls: bool,
    /// Whether to use STARTTLS
    pub use_starttls: bool,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl EmailConfig {
    /// Create EmailConfig from environment variables.
    ///
    /// `SMTP_HOST` is required; callers treat its absence as "mail disabled".
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading email configuration from environment variables");

        let smtp_host = env::var("SMTP_HOST")
            .map_err(|_| {
                warn!("SMTP_HOST environment variable not found");
                ConfigError::EnvVarNotFound("SMTP_HOST".to_string())
            })?;
        debug!("SMTP host: {}", smtp_host);

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| {
                warn!("SMTP_PORT not set, defaulting to 587");
                "587".to_string()
            })
            .parse::<u16>()
            .map_err(|_| {
                error!("Invalid SMTP_PORT value");
                ConfigError::InvalidValue("Invalid SMTP_PORT value".to_string())
            })?;
        debug!("SMTP port: {}", smtp_port);

        let smtp_username = env::var("SMTP_USERNAME").ok().filter(|u| !u.is_empty());
        match &smtp_username {
            Some(user) => debug!("SMTP username: {}", user),
            None => debug!("No SMTP username specified"),
        }

        let smtp_password = env::var("SMTP_PASSWORD").ok().filter(|p| !p.is_empty());
        if smtp_password.is_some() {
            debug!("SMTP password: [REDACTED]");
        }

        let use_tls = env::var("SMTP_USE_TLS")
            .unwrap_or_else(|_| {
                warn!("SMTP_USE_TLS not set, defaulting to true");
                "true".to_string()
            })
            .parse::<bool>()
            .unwrap_or(true);
        debug!("SMTP use TLS: {}", use_tls);

        let use_starttls = env::var("SMTP_USE_STARTTLS")
            .unwrap_or_else(|_| {
                warn!("SMTP_USE_STARTTLS not set, defaulting to true");
                "true".to_string()
            })
            .parse::<bool>()
            .unwrap_or(true);
        debug!("SMTP use STARTTLS: {}", use_starttls);

        let connection_timeout_secs = env::var("SMTP_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("SMTP_CONNECTION_TIMEOUT not set, defaulting to 30 seconds");
                "30".to_string()
            })
            .parse::<u64>()
            .unwrap_or(30);
        debug!("Connection timeout: {} seconds", connection_timeout_secs);

        let config = EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            use_tls,
            use_starttls,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("Email configuration loaded successfully");
        Ok(config)
    }

    /// Create EmailConfig for testing
    pub fn from_test_env() -> Self {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: Some("test".to_string()),
            smtp_password: Some("test".to_string()),
            use_tls: false,
            use_starttls: false,
            connection_timeout_secs: 10,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        info!("Validating email configuration");

        if self.smtp_host.is_empty() {
            error!("SMTP host is empty");
            return Err(ConfigError::ValidationError("SMTP host cannot be empty".to_string()));
        }

        if self.smtp_port == 0 {
            error!("SMTP port is 0");
            return Err(ConfigError::ValidationError("SMTP port cannot be 0".to_string()));
        }

        if self.smtp_username.is_some() != self.smtp_password.is_some() {
            error!("SMTP credentials are incomplete");
            return Err(ConfigError::ValidationError(
                "SMTP username and password must be set together".to_string(),
            ));
        }

        if self.connection_timeout_secs == 0 {
            error!("Connection timeout is 0");
            return Err(ConfigError::ValidationError("Connection timeout cannot be 0".to_string()));
        }

        info!("Email configuration validation successful");
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            use_tls: true,
            use_starttls: true,
            connection_timeout_secs: 30,
        }
    }
}
