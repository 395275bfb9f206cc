pub mod delivery_log_repository;
pub mod notification_repository;
pub mod team_repository;
pub mod user_repository;
