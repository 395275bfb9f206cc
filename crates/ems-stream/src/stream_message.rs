use ems_core::BroadcastPayload;

/// Message queued on a connection buffer for one open stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// Live projection of a persisted notification
    Notification(BroadcastPayload),
    /// Sentinel asking the client to close, e.g. after FIFO eviction
    ServerDisconnect { reason: &'static str },
}

impl StreamMessage {
    pub const TOO_MANY_CONNECTIONS: &'static str = "too_many_connections";

    pub fn evicted() -> Self {
        Self::ServerDisconnect {
            reason: Self::TOO_MANY_CONNECTIONS,
        }
    }
}
