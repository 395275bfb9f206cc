use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid delivery channel: {value} {location}")]
    InvalidDeliveryChannel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Payload serialization failed: {source} {location}")]
    Serialize {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
