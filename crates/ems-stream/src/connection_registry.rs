use crate::{ConnectionBuffer, ConnectionId, StreamMessage};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use ems_config::StreamConfig;
use log::{debug, info, warn};
use uuid::Uuid;

/// Registry of live streaming connections, keyed by user id.
///
/// Exclusively owns the user-to-connections mapping. Operations are
/// synchronous and non-blocking so they are safe to call from the async
/// runtime, from fallback worker threads, and from `Drop` impls. Connection
/// sets keep insertion order: the oldest connection is evicted first.
pub struct ConnectionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, Vec<RegisteredConnection>>>>,
    config: StreamConfig,
}

struct RegisteredConnection {
    connection_id: ConnectionId,
    buffer: Arc<ConnectionBuffer>,
}

impl ConnectionRegistry {
    pub fn new(config: StreamConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Register a new connection for a user. Always succeeds: when the user
    /// already holds the per-user maximum, the oldest connection is evicted
    /// and handed a disconnect sentinel (best-effort, its buffer may be full).
    pub fn connect(&self, user_id: Uuid) -> (ConnectionId, Arc<ConnectionBuffer>) {
        let connection_id = ConnectionId::new();
        let buffer = Arc::new(ConnectionBuffer::new(self.config.queue_capacity));

        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let connections = inner.entry(user_id).or_default();

        if connections.len() >= self.config.max_connections_per_user {
            let evicted = connections.remove(0);
            if evicted.buffer.try_push(StreamMessage::evicted()).is_err() {
                debug!(
                    "Evicted connection {} had a full buffer, sentinel dropped",
                    evicted.connection_id
                );
            }
            warn!(
                "User {user_id} exceeded {} connections, evicted oldest ({})",
                self.config.max_connections_per_user, evicted.connection_id
            );
        }

        connections.push(RegisteredConnection {
            connection_id,
            buffer: Arc::clone(&buffer),
        });
        info!(
            "User {user_id} connected ({} active connections)",
            connections.len()
        );

        (connection_id, buffer)
    }

    /// Remove a connection. Idempotent: unknown handles are ignored. Empty
    /// connection sets are dropped so idle users do not accumulate.
    pub fn disconnect(&self, user_id: Uuid, connection_id: ConnectionId) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(connections) = inner.get_mut(&user_id) else {
            return;
        };

        connections.retain(|c| c.connection_id != connection_id);
        let remaining = connections.len();
        if remaining == 0 {
            inner.remove(&user_id);
        }

        info!("User {user_id} disconnected ({remaining} connections remaining)");
    }

    /// Push a message to every live connection of a user. Never blocks and
    /// never errors: a full buffer drops its single oldest message first,
    /// and if the retry still fails the new message is dropped for that
    /// connection only. No live connections is a no-op.
    pub fn broadcast(&self, user_id: Uuid, message: StreamMessage) {
        let buffers: Vec<Arc<ConnectionBuffer>> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            match inner.get(&user_id) {
                Some(connections) => connections.iter().map(|c| Arc::clone(&c.buffer)).collect(),
                None => return,
            }
        };

        for buffer in &buffers {
            if let Err(rejected) = buffer.try_push(message.clone()) {
                // Make space, then retry exactly once
                buffer.drop_oldest();
                if buffer.try_push(rejected).is_err() {
                    warn!("Dropping message for user {user_id} due to full buffer");
                }
            }
        }

        debug!(
            "Broadcast message to user {user_id} on {} connections",
            buffers.len()
        );
    }

    /// Number of live connections for a user.
    pub fn connection_count(&self, user_id: Uuid) -> usize {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.get(&user_id).map_or(0, Vec::len)
    }

    /// Number of users with at least one live connection.
    pub fn user_count(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.len()
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
        }
    }
}
