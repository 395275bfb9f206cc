use crate::Result as DbErrorResult;

use ems_core::Notification;

use chrono::DateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub async fn create<'e, E>(executor: E, notification: &Notification) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = notification.id.to_string();
        let user_id = notification.user_id.to_string();
        let created_at = notification.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO notifications (id, user_id, title, message, is_read, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Notification>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, user_id, title, message, is_read, created_at
              FROM notifications
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Self::map_row))
    }

    /// All notifications for a user, newest first.
    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Notification>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, user_id, title, message, is_read, created_at
              FROM notifications
              WHERE user_id = ?
              ORDER BY created_at DESC, id
              "#,
        )
        .bind(user_id_str)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    /// Mark one notification read; returns false when it does not exist
    /// or belongs to another user.
    pub async fn mark_read<'e, E>(executor: E, id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
              UPDATE notifications
              SET is_read = 1
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id_str)
        .bind(user_id_str)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread notification for a user read; returns the count.
    pub async fn mark_all_read<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
              UPDATE notifications
              SET is_read = 1
              WHERE user_id = ? AND is_read = 0
              "#,
        )
        .bind(user_id_str)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    fn map_row(row: SqliteRow) -> Notification {
        Notification {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            user_id: Uuid::parse_str(&row.get::<String, _>("user_id")).unwrap(),
            title: row.get("title"),
            message: row.get("message"),
            is_read: row.get("is_read"),
            created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
        }
    }
}
