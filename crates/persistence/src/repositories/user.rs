//! User repository for database operations.

use sqlx::PgPool;

use crate::entities::AttendeeEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the users holding at least one response for an event.
    pub async fn list_attendees(&self, hash_id: &str) -> Result<Vec<AttendeeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_attendees");
        let result = sqlx::query_as::<_, AttendeeEntity>(
            r#"
            SELECT DISTINCT u.id, u.name
            FROM users u
            JOIN event_date_responses r ON r.attendee_id = u.id
            JOIN event_dates d ON r.event_date_id = d.id
            JOIN events e ON d.event_id = e.id
            WHERE e.hash_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(hash_id)
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}
