use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, DeliveryConfig, LoggingConfig,
    MailConfig, ServerConfig, StreamConfig, WebhookConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub stream: StreamConfig,
    pub mail: MailConfig,
    pub webhook: WebhookConfig,
    pub delivery: DeliveryConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for EMS_CONFIG_DIR env var, else use ./.ems/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply EMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: EMS_CONFIG_DIR env var > ./.ems/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("EMS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ems"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.stream.validate()?;
        self.mail.validate()?;
        self.webhook.validate()?;
        self.delivery.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth: {}",
            if self.auth.enabled {
                "enabled (HS256)"
            } else {
                "disabled"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );

        info!(
            "  stream: buffer={}, max_per_user={}, keep_alive={}s",
            self.stream.queue_capacity,
            self.stream.max_connections_per_user,
            self.stream.keep_alive_timeout_secs
        );

        info!(
            "  mail: {} ({}:{})",
            if self.mail.is_configured() {
                "configured"
            } else {
                "mock"
            },
            self.mail.server,
            self.mail.port
        );

        info!(
            "  webhook: retries={}, base_delay={}ms, timeout={}s",
            self.webhook.max_retries, self.webhook.base_delay_ms, self.webhook.timeout_secs
        );

        info!("  delivery: max_payload={}", self.delivery.max_payload_len);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("EMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("EMS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("EMS_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("EMS_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("EMS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);

        // Logging
        Self::apply_env_parse("EMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("EMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("EMS_LOG_FILE", &mut self.logging.file);

        // Stream
        Self::apply_env_parse("EMS_STREAM_QUEUE_CAPACITY", &mut self.stream.queue_capacity);
        Self::apply_env_parse(
            "EMS_STREAM_MAX_CONNECTIONS_PER_USER",
            &mut self.stream.max_connections_per_user,
        );
        Self::apply_env_parse(
            "EMS_STREAM_KEEP_ALIVE_TIMEOUT_SECS",
            &mut self.stream.keep_alive_timeout_secs,
        );

        // Mail
        Self::apply_env_option_string("EMS_MAIL_USERNAME", &mut self.mail.username);
        Self::apply_env_option_string("EMS_MAIL_PASSWORD", &mut self.mail.password);
        Self::apply_env_string("EMS_MAIL_FROM", &mut self.mail.from);
        Self::apply_env_string("EMS_MAIL_SERVER", &mut self.mail.server);
        Self::apply_env_parse("EMS_MAIL_PORT", &mut self.mail.port);

        // Webhook
        Self::apply_env_parse("EMS_WEBHOOK_MAX_RETRIES", &mut self.webhook.max_retries);
        Self::apply_env_parse("EMS_WEBHOOK_BASE_DELAY_MS", &mut self.webhook.base_delay_ms);
        Self::apply_env_parse("EMS_WEBHOOK_TIMEOUT_SECS", &mut self.webhook.timeout_secs);

        // Delivery
        Self::apply_env_parse(
            "EMS_DELIVERY_MAX_PAYLOAD_LEN",
            &mut self.delivery.max_payload_len,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
