mod error;
mod notifications;
mod stream;
