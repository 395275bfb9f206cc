pub mod app_state;
pub mod connection_buffer;
pub mod connection_id;
pub mod connection_registry;
pub mod deferred_work;
pub mod delivery_bridge;
pub mod sse_session;
pub mod stream_message;

pub use app_state::AppState;
pub use connection_buffer::ConnectionBuffer;
pub use connection_id::ConnectionId;
pub use connection_registry::ConnectionRegistry;
pub use deferred_work::DeferredWorkSink;
pub use delivery_bridge::DeliveryBridge;
pub use sse_session::{SessionEvent, handler};
pub use stream_message::StreamMessage;
