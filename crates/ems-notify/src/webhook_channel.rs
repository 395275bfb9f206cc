use crate::DeliveryLogger;

use std::time::Duration;

use chrono::Utc;
use ems_config::WebhookConfig;
use ems_core::{DeliveryChannel, DeliveryLog};
use ems_db::TeamRepository;

use log::{error, info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Best-effort webhook delivery with sequential retry and exponential
/// backoff. Every attempt and the final outcome are audited; nothing is
/// surfaced to the triggering operation.
pub struct WebhookChannel {
    pool: SqlitePool,
    config: WebhookConfig,
    logger: DeliveryLogger,
    client: reqwest::Client,
}

impl WebhookChannel {
    pub fn new(pool: SqlitePool, config: WebhookConfig, logger: DeliveryLogger) -> Self {
        Self {
            pool,
            config,
            logger,
            client: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, team_id: Uuid, event: &str, data: serde_json::Value) {
        let team = match TeamRepository::find_by_id(&self.pool, team_id).await {
            Ok(Some(team)) => team,
            Ok(None) => return,
            Err(e) => {
                error!("Team lookup failed for webhook notification: {e}");
                return;
            }
        };

        // No callback URL configured is a no-op, not an attempt
        let Some(url) = team.webhook_url else {
            return;
        };

        let envelope = serde_json::json!({
            "event": event,
            "team": team.name,
            "timestamp": Utc::now().to_rfc3339(),
            "data": data,
        });
        let payload = envelope.to_string();

        let mut last_error = String::new();
        for attempt in 1..=self.config.max_retries {
            self.log_entry(team_id, format!("ATTEMPT_{attempt}"), &payload, None)
                .await;

            match self.post(&url, &envelope).await {
                Ok(()) => {
                    info!("Webhook {event} sent to {} on attempt {attempt}", team.name);
                    self.log_entry(team_id, "SENT".into(), &payload, None).await;
                    return;
                }
                Err(e) => {
                    warn!("Webhook {event} attempt {attempt} to {} failed: {e}", team.name);
                    last_error = e;
                }
            }

            if attempt < self.config.max_retries {
                let delay = self.config.base_delay_ms * 2u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }

        error!(
            "Webhook {event} to {} exhausted {} attempts: {last_error}",
            team.name, self.config.max_retries
        );
        self.log_entry(
            team_id,
            format!("FAILED_{last_error}"),
            &payload,
            Some(last_error),
        )
        .await;
    }

    /// One POST attempt. Any response with status below 400 is success.
    async fn post(&self, url: &str, envelope: &serde_json::Value) -> Result<(), String> {
        let response = self
            .client
            .post(url)
            .json(envelope)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.as_u16() < 400 {
            Ok(())
        } else {
            Err(format!("status {}", status.as_u16()))
        }
    }

    async fn log_entry(&self, team_id: Uuid, status: String, payload: &str, error: Option<String>) {
        let mut entry = DeliveryLog::for_team(team_id, DeliveryChannel::Webhook, status)
            .with_payload(payload.to_string());
        if let Some(error) = error {
            entry = entry.with_error(error);
        }

        self.logger.record(entry).await;
    }
}
