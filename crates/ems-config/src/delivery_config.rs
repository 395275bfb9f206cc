use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_MAX_PAYLOAD_LEN: usize = 100;
pub const MAX_MAX_PAYLOAD_LEN: usize = 100_000;
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 5000;

/// Delivery audit log settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Audit payloads are truncated to this many characters before storage
    pub max_payload_len: usize,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}

impl DeliveryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_payload_len < MIN_MAX_PAYLOAD_LEN || self.max_payload_len > MAX_MAX_PAYLOAD_LEN
        {
            return Err(ConfigError::config(format!(
                "delivery.max_payload_len must be {}-{}, got {}",
                MIN_MAX_PAYLOAD_LEN, MAX_MAX_PAYLOAD_LEN, self.max_payload_len
            )));
        }

        Ok(())
    }
}
