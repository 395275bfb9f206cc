use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 symmetric secret; required when auth is enabled.
    pub jwt_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match &self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.jwt_secret is required when auth is enabled",
            )),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LEN => Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_LEN,
                secret.len()
            ))),
            Some(_) => Ok(()),
        }
    }
}
