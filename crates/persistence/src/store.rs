//! PostgreSQL implementation of [`SchedulingStore`].

use domain::models::{Attendee, DateResponse, Event, EventDateOption, EventSummary, NewEvent, NewUser};
use domain::services::{SchedulingStore, StoreError};
use sqlx::PgPool;
use tracing::error;

use crate::metrics::record_pool_metrics;
use crate::repositories::{EventDateRepository, EventRepository, ResponseRepository, UserRepository};

/// Scheduling data stored in PostgreSQL.
#[derive(Clone)]
pub struct PgSchedulingStore {
    pool: PgPool,
    events: EventRepository,
    event_dates: EventDateRepository,
    responses: ResponseRepository,
    users: UserRepository,
}

impl PgSchedulingStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            event_dates: EventDateRepository::new(pool.clone()),
            responses: ResponseRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }
}

fn database_error(err: sqlx::Error) -> StoreError {
    error!(error = %err, "Database query failed");
    StoreError::Database(err.to_string())
}

#[async_trait::async_trait]
impl SchedulingStore for PgSchedulingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        record_pool_metrics(&self.pool);
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(())
    }

    async fn create_event(&self, new_event: NewEvent) -> Result<Event, StoreError> {
        self.events
            .create_event(
                &new_event.hash_id,
                &new_event.title,
                &new_event.description,
                &new_event.organizer.name,
                &new_event.organizer.email,
                &new_event.dates,
            )
            .await
            .map(Into::into)
            .map_err(database_error)
    }

    async fn find_event_summary(
        &self,
        hash_id: &str,
    ) -> Result<Option<EventSummary>, StoreError> {
        self.events
            .find_summary_by_hash(hash_id)
            .await
            .map(|summary| summary.map(Into::into))
            .map_err(database_error)
    }

    async fn list_date_options(&self, hash_id: &str) -> Result<Vec<EventDateOption>, StoreError> {
        self.event_dates
            .list_for_event(hash_id)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(database_error)
    }

    async fn list_attendees(&self, hash_id: &str) -> Result<Vec<Attendee>, StoreError> {
        self.users
            .list_attendees(hash_id)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(database_error)
    }

    async fn list_attendee_responses(
        &self,
        hash_id: &str,
        attendee_id: i64,
    ) -> Result<Vec<DateResponse>, StoreError> {
        self.responses
            .list_for_attendee(hash_id, attendee_id)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(database_error)
    }

    async fn create_attendee(
        &self,
        attendee: NewUser,
        responses: &[DateResponse],
    ) -> Result<i64, StoreError> {
        self.responses
            .create_attendee(&attendee.name, &attendee.email, responses)
            .await
            .map_err(database_error)
    }

    async fn replace_responses(
        &self,
        attendee_id: i64,
        responses: &[DateResponse],
    ) -> Result<(), StoreError> {
        let found = self
            .responses
            .upsert_responses(attendee_id, responses)
            .await
            .map_err(database_error)?;
        if found {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("User {} not found", attendee_id)))
        }
    }
}
