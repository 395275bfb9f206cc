use crate::Result as DbErrorResult;

use ems_core::{DeliveryChannel, DeliveryLog};

use chrono::DateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Append-only audit log. Rows are never updated after insert.
pub struct DeliveryLogRepository;

impl DeliveryLogRepository {
    pub async fn create<'e, E>(executor: E, log: &DeliveryLog) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = log.id.to_string();
        let user_id = log.user_id.map(|u| u.to_string());
        let team_id = log.team_id.map(|t| t.to_string());
        let channel = log.channel.as_str();
        let created_at = log.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO delivery_logs (
                  id, user_id, team_id, channel, status, payload, error_message, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(team_id)
        .bind(channel)
        .bind(&log.status)
        .bind(&log.payload)
        .bind(&log.error_message)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<DeliveryLog>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, user_id, team_id, channel, status, payload, error_message, created_at
              FROM delivery_logs
              WHERE user_id = ?
              ORDER BY created_at, id
              "#,
        )
        .bind(user_id_str)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    pub async fn find_by_team<'e, E>(executor: E, team_id: Uuid) -> DbErrorResult<Vec<DeliveryLog>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let team_id_str = team_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, user_id, team_id, channel, status, payload, error_message, created_at
              FROM delivery_logs
              WHERE team_id = ?
              ORDER BY created_at, id
              "#,
        )
        .bind(team_id_str)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    fn map_row(row: SqliteRow) -> DeliveryLog {
        DeliveryLog {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            user_id: row
                .get::<Option<String>, _>("user_id")
                .map(|u| Uuid::parse_str(&u).unwrap()),
            team_id: row
                .get::<Option<String>, _>("team_id")
                .map(|t| Uuid::parse_str(&t).unwrap()),
            channel: DeliveryChannel::parse(&row.get::<String, _>("channel")).unwrap(),
            status: row.get("status"),
            payload: row.get("payload"),
            error_message: row.get("error_message"),
            created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
        }
    }
}
