use crate::DeliveryLogger;

use ems_config::MailConfig;
use ems_core::{DeliveryChannel, DeliveryLog, Recipient};
use ems_db::UserRepository;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{error, info};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Best-effort email delivery. Outcomes are audited, never surfaced: the
/// triggering business operation must not fail because email did.
pub struct EmailChannel {
    pool: SqlitePool,
    config: MailConfig,
    logger: DeliveryLogger,
}

impl EmailChannel {
    pub fn new(pool: SqlitePool, config: MailConfig, logger: DeliveryLogger) -> Self {
        Self {
            pool,
            config,
            logger,
        }
    }

    pub async fn send(&self, user_id: Uuid, subject: &str, body: &str) {
        let recipient = match UserRepository::find_by_id(&self.pool, user_id).await {
            Ok(Some(recipient)) => recipient,
            Ok(None) => {
                error!("User {user_id} not found for email notification");
                return;
            }
            Err(e) => {
                error!("Recipient lookup failed for email notification: {e}");
                return;
            }
        };

        // Policy short-circuit, not an attempt: no audit entry
        if !recipient.email_notifications {
            info!("Email notifications disabled for user {}", recipient.username);
            return;
        }

        if !self.config.is_configured() {
            info!("[MOCK EMAIL] To: {} | Subject: {subject}", recipient.email);
            self.log_outcome(user_id, "MOCK_SENT".into(), body, None).await;
            return;
        }

        match self.deliver(&recipient, subject, body).await {
            Ok(()) => {
                info!("Email sent successfully to {}", recipient.email);
                self.log_outcome(user_id, "SENT".into(), body, None).await;
            }
            Err(e) => {
                error!("Email failed to {user_id}: {e}");
                self.log_outcome(user_id, "FAILED".into(), body, Some(e)).await;
            }
        }
    }

    async fn deliver(&self, recipient: &Recipient, subject: &str, body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(self.config.from.parse().map_err(|e| format!("invalid sender address: {e}"))?)
            .to(recipient
                .email
                .parse()
                .map_err(|e| format!("invalid recipient address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        let transport = self.transport().map_err(|e| e.to_string())?;
        transport.send(message).await.map_err(|e| e.to_string())?;

        Ok(())
    }

    fn transport(
        &self,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, lettre::transport::smtp::Error> {
        // is_configured() guarantees both credentials are present here
        let username = self.config.username.clone().unwrap_or_default();
        let password = self.config.password.clone().unwrap_or_default();

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
                .port(self.config.port)
                .credentials(Credentials::new(username, password))
                .build(),
        )
    }

    async fn log_outcome(&self, user_id: Uuid, status: String, body: &str, error: Option<String>) {
        let mut entry = DeliveryLog::for_user(user_id, DeliveryChannel::Email, status)
            .with_payload(body.to_string());
        if let Some(error) = error {
            entry = entry.with_error(error);
        }

        self.logger.record(entry).await;
    }
}
