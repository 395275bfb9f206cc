use crate::Result as DbErrorResult;

use ems_core::Recipient;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, recipient: &Recipient) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = recipient.id.to_string();

        sqlx::query(
            r#"
              INSERT INTO users (id, username, email, email_notifications)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&recipient.username)
        .bind(&recipient.email)
        .bind(recipient.email_notifications)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Recipient>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, username, email, email_notifications
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Self::map_row))
    }

    fn map_row(row: SqliteRow) -> Recipient {
        Recipient {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            username: row.get("username"),
            email: row.get("email"),
            email_notifications: row.get("email_notifications"),
        }
    }
}
