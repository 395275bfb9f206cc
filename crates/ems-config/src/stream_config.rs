use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Per-connection buffer capacity constraints
pub const MIN_QUEUE_CAPACITY: usize = 1;
pub const MAX_QUEUE_CAPACITY: usize = 10000;
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

// Per-user connection limit constraints
pub const MIN_CONNECTIONS_PER_USER: usize = 1;
pub const MAX_CONNECTIONS_PER_USER: usize = 64;
pub const DEFAULT_CONNECTIONS_PER_USER: usize = 6;

// Keep-alive timeout constraints (seconds)
pub const MIN_KEEP_ALIVE_TIMEOUT_SECS: u64 = 1;
pub const MAX_KEEP_ALIVE_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_KEEP_ALIVE_TIMEOUT_SECS: u64 = 15;

/// Streaming (SSE) connection settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Bounded per-connection buffer capacity (messages)
    pub queue_capacity: usize,
    /// Maximum simultaneous streams per user before FIFO eviction
    pub max_connections_per_user: usize,
    /// Seconds to wait for a queued message before emitting a ping
    pub keep_alive_timeout_secs: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_connections_per_user: DEFAULT_CONNECTIONS_PER_USER,
            keep_alive_timeout_secs: DEFAULT_KEEP_ALIVE_TIMEOUT_SECS,
        }
    }
}

impl StreamConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.queue_capacity < MIN_QUEUE_CAPACITY || self.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(ConfigError::config(format!(
                "stream.queue_capacity must be {}-{}, got {}",
                MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, self.queue_capacity
            )));
        }

        if self.max_connections_per_user < MIN_CONNECTIONS_PER_USER
            || self.max_connections_per_user > MAX_CONNECTIONS_PER_USER
        {
            return Err(ConfigError::config(format!(
                "stream.max_connections_per_user must be {}-{}, got {}",
                MIN_CONNECTIONS_PER_USER, MAX_CONNECTIONS_PER_USER, self.max_connections_per_user
            )));
        }

        if self.keep_alive_timeout_secs < MIN_KEEP_ALIVE_TIMEOUT_SECS
            || self.keep_alive_timeout_secs > MAX_KEEP_ALIVE_TIMEOUT_SECS
        {
            return Err(ConfigError::config(format!(
                "stream.keep_alive_timeout_secs must be {}-{}, got {}",
                MIN_KEEP_ALIVE_TIMEOUT_SECS,
                MAX_KEEP_ALIVE_TIMEOUT_SECS,
                self.keep_alive_timeout_secs
            )));
        }

        Ok(())
    }
}
