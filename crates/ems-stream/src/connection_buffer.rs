use crate::StreamMessage;

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;

/// Bounded FIFO holding messages awaiting delivery to one open stream.
///
/// Producers (registry broadcast, eviction sentinel) push from any thread;
/// the single consumer is the owning streaming session. Push never blocks:
/// a full buffer rejects the message and the caller decides what to drop.
pub struct ConnectionBuffer {
    capacity: usize,
    queue: Mutex<VecDeque<StreamMessage>>,
    notify: Notify,
}

impl ConnectionBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            notify: Notify::new(),
        }
    }

    /// Enqueue without blocking. Returns the message back when full.
    pub fn try_push(&self, message: StreamMessage) -> Result<(), StreamMessage> {
        {
            let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
            if queue.len() >= self.capacity {
                return Err(message);
            }
            queue.push_back(message);
        }
        self.notify.notify_one();
        Ok(())
    }

    /// Drop the single oldest queued message to make room.
    pub fn drop_oldest(&self) -> Option<StreamMessage> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.pop_front()
    }

    /// Dequeue the oldest message, if any.
    pub fn pop(&self) -> Option<StreamMessage> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.pop_front()
    }

    pub fn len(&self) -> usize {
        let queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait up to `wait` for a queued message. `None` means the timeout
    /// elapsed and the session should emit a keep-alive.
    pub async fn recv_timeout(&self, wait: Duration) -> Option<StreamMessage> {
        if let Some(message) = self.pop() {
            return Some(message);
        }

        match tokio::time::timeout(wait, self.notify.notified()).await {
            Ok(()) => self.pop(),
            Err(_) => None,
        }
    }
}
