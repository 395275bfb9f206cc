use crate::Result as DbErrorResult;

use ems_core::Team;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct TeamRepository;

impl TeamRepository {
    pub async fn create<'e, E>(executor: E, team: &Team) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = team.id.to_string();

        sqlx::query(
            r#"
              INSERT INTO teams (id, name, webhook_url)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&team.name)
        .bind(&team.webhook_url)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Team>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, name, webhook_url
              FROM teams
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Self::map_row))
    }

    fn map_row(row: SqliteRow) -> Team {
        Team {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            name: row.get("name"),
            webhook_url: row.get("webhook_url"),
        }
    }
}
