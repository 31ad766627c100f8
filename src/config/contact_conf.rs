use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info};

use crate::config::ConfigError;

/// Addresses used for contact-form notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// No-reply sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Business inbox receiving the notifications
    pub to_email: String,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading contact notification configuration");
        let defaults = ContactConfig::default();

        let config = ContactConfig {
            from_email: env::var("CONTACT_FROM_EMAIL").unwrap_or(defaults.from_email),
            from_name: env::var("CONTACT_FROM_NAME").unwrap_or(defaults.from_name),
            to_email: env::var("CONTACT_TO_EMAIL").unwrap_or(defaults.to_email),
        };
        debug!(from = %config.from_email, to = %config.to_email, "Contact notification addresses");

        config.validate()?;
        Ok(config)
    }

    pub fn from_test_env() -> Self {
        ContactConfig {
            from_email: "noreply@test.local".to_string(),
            from_name: "Test Site".to_string(),
            to_email: "inbox@test.local".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("from email", &self.from_email), ("to email", &self.to_email)] {
            if value.is_empty() || !value.contains('@') {
                error!("Invalid contact {}: {:?}", key, value);
                return Err(ConfigError::ValidationError(format!("Invalid contact {}", key)));
            }
        }
        Ok(())
    }

    /// Sender mailbox in `Name <address>` form
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            from_email: "noreply@wrp.ae".to_string(),
            from_name: "WRP Website".to_string(),
            to_email: "info@wrp.ae".to_string(),
        }
    }
}
