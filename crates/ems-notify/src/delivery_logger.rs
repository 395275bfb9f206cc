use ems_config::DeliveryConfig;
use ems_core::DeliveryLog;
use ems_db::DeliveryLogRepository;

use log::error;
use sqlx::SqlitePool;

/// Appends audit rows for out-of-band delivery attempts and outcomes.
///
/// Insert failures are reported to the process log only. An audit failure
/// must never abort the delivery attempt it describes.
#[derive(Clone)]
pub struct DeliveryLogger {
    pool: SqlitePool,
    max_payload_len: usize,
}

impl DeliveryLogger {
    pub fn new(pool: SqlitePool, config: &DeliveryConfig) -> Self {
        Self {
            pool,
            max_payload_len: config.max_payload_len,
        }
    }

    pub async fn record(&self, mut entry: DeliveryLog) {
        if let Some(payload) = entry.payload.take() {
            entry.payload = Some(truncate_payload(payload, self.max_payload_len));
        }

        if let Err(e) = DeliveryLogRepository::create(&self.pool, &entry).await {
            error!("Failed to append delivery log entry: {e}");
        }
    }
}

/// Bound the stored payload to `max` characters, respecting UTF-8 boundaries.
fn truncate_payload(mut payload: String, max: usize) -> String {
    match payload.char_indices().nth(max) {
        Some((byte_index, _)) => {
            payload.truncate(byte_index);
            payload
        }
        None => payload,
    }
}
