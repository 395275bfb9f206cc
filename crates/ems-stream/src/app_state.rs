use crate::{ConnectionRegistry, DeliveryBridge};

use std::sync::Arc;

use ems_auth::JwtValidator;
use ems_config::StreamConfig;
use sqlx::SqlitePool;

/// Shared application state for streaming and REST handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_validator: Arc<JwtValidator>,
    pub registry: ConnectionRegistry,
    pub bridge: DeliveryBridge,
    pub pool: SqlitePool,
    pub stream: StreamConfig,
}

impl AppState {
    pub fn new(jwt_validator: Arc<JwtValidator>, pool: SqlitePool, stream: StreamConfig) -> Self {
        let registry = ConnectionRegistry::new(stream.clone());
        let bridge = DeliveryBridge::new(registry.clone());

        Self {
            jwt_validator,
            registry,
            bridge,
            pool,
            stream,
        }
    }
}
