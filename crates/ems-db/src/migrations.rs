use crate::error::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending migrations. A no-op on an up-to-date database.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
