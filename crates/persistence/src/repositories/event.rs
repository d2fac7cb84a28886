//! Event repository for database operations.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::entities::{EventEntity, EventSummaryEntity};
use crate::metrics::QueryTimer;

/// Repository for event-related database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the organizer, the event and its date options in one transaction.
    pub async fn create_event(
        &self,
        hash_id: &str,
        title: &str,
        description: &str,
        organizer_name: &str,
        organizer_email: &str,
        dates: &[NaiveDate],
    ) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = self
            .insert_event(
                hash_id,
                title,
                description,
                organizer_name,
                organizer_email,
                dates,
            )
            .await;
        timer.finish(result)
    }

    async fn insert_event(
        &self,
        hash_id: &str,
        title: &str,
        description: &str,
        organizer_name: &str,
        organizer_email: &str,
        dates: &[NaiveDate],
    ) -> Result<EventEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let (organizer_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(organizer_name)
        .bind(organizer_email)
        .fetch_one(&mut *tx)
        .await?;

        let event = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (hash_id, title, description, organizer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, hash_id, title, description, organizer_id, created_at
            "#,
        )
        .bind(hash_id)
        .bind(title)
        .bind(description)
        .bind(organizer_id)
        .fetch_one(&mut *tx)
        .await?;

        for date in dates {
            sqlx::query(
                r#"
                INSERT INTO event_dates (event_id, date)
                VALUES ($1, $2)
                "#,
            )
            .bind(event.id)
            .bind(date)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(event)
    }

    /// Find an event with its organizer by handle.
    pub async fn find_summary_by_hash(
        &self,
        hash_id: &str,
    ) -> Result<Option<EventSummaryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_summary_by_hash");
        let result = sqlx::query_as::<_, EventSummaryEntity>(
            r#"
            SELECT
                e.id, e.hash_id, e.title, e.description,
                u.name as organizer_name, u.email as organizer_email
            FROM events e
            JOIN users u ON e.organizer_id = u.id
            WHERE e.hash_id = $1
            "#,
        )
        .bind(hash_id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }
}
