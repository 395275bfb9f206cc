pub mod error;
pub mod migrations;
pub mod repositories;

pub use error::{DbError, Result};
pub use migrations::{MIGRATOR, run_migrations};
pub use repositories::delivery_log_repository::DeliveryLogRepository;
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::team_repository::TeamRepository;
pub use repositories::user_repository::UserRepository;
