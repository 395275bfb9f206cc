mod auth_config;
mod config;
mod database_config;
mod delivery_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod server_config;
mod stream_config;
mod webhook_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use delivery_config::DeliveryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::MailConfig;
pub use server_config::ServerConfig;
pub use stream_config::StreamConfig;
pub use webhook_config::WebhookConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_AUTH_ENABLED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
