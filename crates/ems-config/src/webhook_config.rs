use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Retry constraints
pub const MIN_MAX_RETRIES: u32 = 1;
pub const MAX_MAX_RETRIES: u32 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

pub const MIN_BASE_DELAY_MS: u64 = 10;
pub const MAX_BASE_DELAY_MS: u64 = 10000;
pub const DEFAULT_BASE_DELAY_MS: u64 = 500;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Webhook channel settings.
///
/// Retries use exponential backoff: base_delay_ms * 2^(attempt-1).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Maximum delivery attempts (including the initial attempt)
    pub max_retries: u32,
    /// Base delay before the first retry in milliseconds
    pub base_delay_ms: u64,
    /// Per-attempt request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_retries < MIN_MAX_RETRIES || self.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::config(format!(
                "webhook.max_retries must be {}-{}, got {}",
                MIN_MAX_RETRIES, MAX_MAX_RETRIES, self.max_retries
            )));
        }

        if self.base_delay_ms < MIN_BASE_DELAY_MS || self.base_delay_ms > MAX_BASE_DELAY_MS {
            return Err(ConfigError::config(format!(
                "webhook.base_delay_ms must be {}-{}, got {}",
                MIN_BASE_DELAY_MS, MAX_BASE_DELAY_MS, self.base_delay_ms
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "webhook.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
