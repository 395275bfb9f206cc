pub mod delivery_logger;
pub mod email_channel;
pub mod error;
pub mod notification_service;
pub mod webhook_channel;

pub use delivery_logger::DeliveryLogger;
pub use email_channel::EmailChannel;
pub use error::{NotifyError, Result};
pub use notification_service::NotificationService;
pub use webhook_channel::WebhookChannel;
