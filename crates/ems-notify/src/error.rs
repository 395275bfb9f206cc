use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Storage error: {source} {location}")]
    Db {
        source: ems_db::DbError,
        location: ErrorLocation,
    },
}

impl From<ems_db::DbError> for NotifyError {
    #[track_caller]
    fn from(source: ems_db::DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
