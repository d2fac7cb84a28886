//! Availability response repository.

use domain::models::DateResponse;
use sqlx::PgPool;

use crate::entities::EventDateResponseEntity;
use crate::metrics::QueryTimer;

/// Repository for attendees' per-date responses.
#[derive(Clone)]
pub struct ResponseRepository {
    pool: PgPool,
}

impl ResponseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an attendee and all of their responses in one transaction.
    ///
    /// Returns the new user id.
    pub async fn create_attendee(
        &self,
        name: &str,
        email: &str,
        responses: &[DateResponse],
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("create_attendee_with_responses");
        let result = self.insert_attendee(name, email, responses).await;
        timer.finish(result)
    }

    async fn insert_attendee(
        &self,
        name: &str,
        email: &str,
        responses: &[DateResponse],
    ) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let (attendee_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        for response in responses {
            sqlx::query(
                r#"
                INSERT INTO event_date_responses (event_date_id, attendee_id, event_date_response)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(response.event_date_id)
            .bind(attendee_id)
            .bind(response.response)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(attendee_id)
    }

    /// Insert or overwrite every given response of an attendee in one transaction.
    ///
    /// Returns `false`, writing nothing, if the attendee does not exist.
    pub async fn upsert_responses(
        &self,
        attendee_id: i64,
        responses: &[DateResponse],
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("upsert_attendee_responses");
        let result = self.write_responses(attendee_id, responses).await;
        timer.finish(result)
    }

    async fn write_responses(
        &self,
        attendee_id: i64,
        responses: &[DateResponse],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Locks the attendee row so it cannot disappear before commit.
        let attendee: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM users
            WHERE id = $1
            FOR SHARE
            "#,
        )
        .bind(attendee_id)
        .fetch_optional(&mut *tx)
        .await?;
        if attendee.is_none() {
            return Ok(false);
        }

        for response in responses {
            sqlx::query(
                r#"
                INSERT INTO event_date_responses (event_date_id, attendee_id, event_date_response)
                VALUES ($1, $2, $3)
                ON CONFLICT (event_date_id, attendee_id)
                DO UPDATE SET event_date_response = EXCLUDED.event_date_response,
                              updated_at = NOW()
                "#,
            )
            .bind(response.event_date_id)
            .bind(attendee_id)
            .bind(response.response)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// List an attendee's responses for one event, in date option order.
    pub async fn list_for_attendee(
        &self,
        hash_id: &str,
        attendee_id: i64,
    ) -> Result<Vec<EventDateResponseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_attendee_responses");
        let result = sqlx::query_as::<_, EventDateResponseEntity>(
            r#"
            SELECT r.event_date_id, r.attendee_id, r.event_date_response, r.updated_at
            FROM event_date_responses r
            JOIN event_dates d ON r.event_date_id = d.id
            JOIN events e ON d.event_id = e.id
            WHERE e.hash_id = $1 AND r.attendee_id = $2
            ORDER BY d.date, d.id
            "#,
        )
        .bind(hash_id)
        .bind(attendee_id)
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}
