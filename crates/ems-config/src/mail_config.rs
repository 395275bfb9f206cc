use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP transport settings for the email channel.
///
/// Credentials are optional: without them the channel logs a MOCK_SENT
/// outcome instead of performing network delivery.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub server: String,
    pub port: u16,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            from: String::from("admin@ems-pro.com"),
            server: String::from("smtp.gmail.com"),
            port: DEFAULT_SMTP_PORT,
        }
    }
}

impl MailConfig {
    /// Real delivery requires both credentials.
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.from.is_empty() {
            return Err(ConfigError::mail("mail.from cannot be empty"));
        }

        if self.server.is_empty() {
            return Err(ConfigError::mail("mail.server cannot be empty"));
        }

        Ok(())
    }
}
