pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::broadcast_payload::BroadcastPayload;
pub use models::delivery_channel::DeliveryChannel;
pub use models::delivery_log::DeliveryLog;
pub use models::notification::Notification;
pub use models::recipient::Recipient;
pub use models::team::Team;

#[cfg(test)]
mod tests;
