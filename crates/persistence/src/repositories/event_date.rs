//! Event date option repository.

use sqlx::PgPool;

use crate::entities::EventDateEntity;
use crate::metrics::QueryTimer;

/// Repository for the date options proposed for events.
#[derive(Clone)]
pub struct EventDateRepository {
    pool: PgPool,
}

impl EventDateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an event's date options, ascending by date.
    pub async fn list_for_event(&self, hash_id: &str) -> Result<Vec<EventDateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_dates");
        let result = sqlx::query_as::<_, EventDateEntity>(
            r#"
            SELECT d.id, d.event_id, d.date
            FROM event_dates d
            JOIN events e ON d.event_id = e.id
            WHERE e.hash_id = $1
            ORDER BY d.date, d.id
            "#,
        )
        .bind(hash_id)
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}
