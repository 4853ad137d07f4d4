use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{RepositoryError, WebinarRepository};
use crate::models::Webinar;

/// Таблица `"Webinar"` в PostgreSQL.
#[derive(Clone)]
pub struct PostgresWebinarRepository {
    pool: PgPool,
}

impl PostgresWebinarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO "Webinar" (id, "organizerId", title, "startDate", "endDate", seats)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(&webinar.id)
        .bind(&webinar.organizer_id)
        .bind(&webinar.title)
        .bind(webinar.start_date)
        .bind(webinar.end_date)
        .bind(webinar.seats)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::Duplicate(webinar.id.clone())
            }
            other => RepositoryError::Database(other),
        })?;

        debug!("Webinar {} created", webinar.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Webinar>, RepositoryError> {
        let webinar = sqlx::query_as::<_, Webinar>(
            r#"SELECT id, "organizerId", title, "startDate", "endDate", seats
               FROM "Webinar"
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(webinar)
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        // Последняя запись побеждает: версии строки нет
        let result = sqlx::query(
            r#"UPDATE "Webinar"
               SET "organizerId" = $2, title = $3, "startDate" = $4, "endDate" = $5, seats = $6
               WHERE id = $1"#,
        )
        .bind(&webinar.id)
        .bind(&webinar.organizer_id)
        .bind(&webinar.title)
        .bind(webinar.start_date)
        .bind(webinar.end_date)
        .bind(webinar.seats)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::MissingRow(webinar.id.clone()));
        }

        debug!("Webinar {} updated", webinar.id);
        Ok(())
    }
}
