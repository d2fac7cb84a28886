//! Persistence seam for scheduling data.
//!
//! Request handlers and the summary assembler only talk to storage through
//! [`SchedulingStore`]. The PostgreSQL implementation lives in the
//! persistence crate; [`super::memory_store::InMemorySchedulingStore`] backs
//! tests.

use thiserror::Error;

use crate::models::{
    Attendee, DateResponse, Event, EventDateOption, EventSummary, NewEvent, NewUser,
};

/// Errors surfaced by a [`SchedulingStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Storage operations needed to schedule events and collect availability.
#[async_trait::async_trait]
pub trait SchedulingStore: Send + Sync {
    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Creates the organizer, the event and all of its date options together.
    async fn create_event(&self, new_event: NewEvent) -> Result<Event, StoreError>;

    /// Event joined with its organizer, if the handle is known.
    async fn find_event_summary(&self, hash_id: &str)
        -> Result<Option<EventSummary>, StoreError>;

    /// Date options of an event, ascending by date.
    async fn list_date_options(&self, hash_id: &str) -> Result<Vec<EventDateOption>, StoreError>;

    /// Users holding at least one response for the event, ordered by id.
    async fn list_attendees(&self, hash_id: &str) -> Result<Vec<Attendee>, StoreError>;

    /// One attendee's responses for an event, in date option order.
    async fn list_attendee_responses(
        &self,
        hash_id: &str,
        attendee_id: i64,
    ) -> Result<Vec<DateResponse>, StoreError>;

    /// Creates an attendee together with their complete response set.
    ///
    /// Returns the new user id.
    async fn create_attendee(
        &self,
        attendee: NewUser,
        responses: &[DateResponse],
    ) -> Result<i64, StoreError>;

    /// Inserts or overwrites every given (date option, attendee) response.
    async fn replace_responses(
        &self,
        attendee_id: i64,
        responses: &[DateResponse],
    ) -> Result<(), StoreError>;
}
