pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::auth_user::AuthUser,
    notifications::{
        mark_read_response::MarkReadResponse,
        notification_dto::NotificationDto,
        notification_list_response::NotificationListResponse,
        notifications::{list_notifications, mark_all_read, mark_notification_read},
    },
};

use crate::routes::build_router;

use ems_auth::JwtValidator;
use ems_stream::AppState;

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

/// Accepted only when auth.enabled = false, for local development.
const DEV_JWT_SECRET: &str = "ems-development-secret-do-not-use-in-production";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env if present, then load and validate configuration
    let _ = dotenvy::dotenv();
    let config = ems_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ems_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ems-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    ems_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Create JWT validator
    let jwt_validator = if config.auth.enabled {
        let secret = match config.auth.jwt_secret {
            Some(ref secret) => secret.as_bytes(),
            None => unreachable!("validate() ensures a JWT secret when auth.enabled"),
        };
        info!("JWT: HS256 authentication enabled");
        Arc::new(JwtValidator::with_hs256(secret))
    } else {
        warn!("Authentication DISABLED - accepting tokens signed with the development secret");
        Arc::new(JwtValidator::with_hs256(DEV_JWT_SECRET.as_bytes()))
    };

    // Build application state (registry and delivery bridge live inside)
    let app_state = AppState::new(jwt_validator, pool, config.stream.clone());

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for SIGINT: {}", e);
                return;
            }
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
