use crate::{ConnectionRegistry, DeferredWorkSink, StreamMessage};

use ems_core::BroadcastPayload;

use log::error;
use tokio::runtime::Handle;
use uuid::Uuid;

/// Bridges synchronous callers to the live broadcast path.
///
/// Picks a scheduling strategy at call time: a caller-supplied deferred-work
/// sink, the current tokio runtime, or a dedicated short-lived worker thread
/// when no runtime is active (periodic background jobs). The caller is never
/// blocked and never sees a delivery failure.
pub struct DeliveryBridge {
    registry: ConnectionRegistry,
}

impl DeliveryBridge {
    pub fn new(registry: ConnectionRegistry) -> Self {
        Self { registry }
    }

    pub fn schedule_broadcast(
        &self,
        user_id: Uuid,
        payload: BroadcastPayload,
        sink: Option<&dyn DeferredWorkSink>,
    ) {
        let registry = self.registry.clone();
        let job = move || registry.broadcast(user_id, StreamMessage::Notification(payload));

        if let Some(sink) = sink {
            sink.defer(Box::new(job));
            return;
        }

        match Handle::try_current() {
            Ok(handle) => {
                // Fire-and-forget on the active runtime
                handle.spawn(async move { job() });
            }
            Err(_) => {
                // No runtime (e.g. a plain background thread): run the
                // synchronous broadcast on a dedicated worker thread
                let spawned = std::thread::Builder::new()
                    .name("ems-broadcast".into())
                    .spawn(job);

                if let Err(e) = spawned {
                    error!("Failed to spawn broadcast worker for user {user_id}: {e}");
                }
            }
        }
    }
}

impl Clone for DeliveryBridge {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}
