//! In-memory scheduling store for development and testing.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use super::store::{SchedulingStore, StoreError};
use crate::models::{
    Attendee, DateResponse, Event, EventDateOption, EventSummary, NewEvent, NewUser, User,
};

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    events: Vec<Event>,
    date_options: Vec<EventDateOption>,
    /// Keyed by (event_date_id, attendee_id).
    responses: BTreeMap<(i64, i64), bool>,
    next_id: i64,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_user(&mut self, new_user: NewUser) -> i64 {
        let id = self.next_id();
        self.users.push(User {
            id,
            name: new_user.name,
            email: new_user.email,
        });
        id
    }

    fn event(&self, hash_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.hash_id == hash_id)
    }

    fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn options_for(&self, hash_id: &str) -> Vec<EventDateOption> {
        let Some(event) = self.event(hash_id) else {
            return Vec::new();
        };
        let mut options: Vec<EventDateOption> = self
            .date_options
            .iter()
            .filter(|o| o.event_id == event.id)
            .cloned()
            .collect();
        options.sort_by_key(|o| (o.date, o.id));
        options
    }

    fn check_date_options_exist(&self, responses: &[DateResponse]) -> Result<(), StoreError> {
        match responses
            .iter()
            .find(|r| !self.date_options.iter().any(|o| o.id == r.event_date_id))
        {
            Some(missing) => Err(StoreError::Database(format!(
                "date option {} does not exist",
                missing.event_date_id
            ))),
            None => Ok(()),
        }
    }
}

/// A [`SchedulingStore`] holding everything in process memory.
///
/// Enforces the same constraints as the relational schema: unique event
/// handles and responses that reference existing users and date options.
#[derive(Debug, Default)]
pub struct InMemorySchedulingStore {
    state: RwLock<MemoryState>,
    /// Whether writes and pings should fail, to exercise error paths.
    simulate_failure: AtomicBool,
}

impl InMemorySchedulingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose writes and pings fail.
    pub fn failing() -> Self {
        Self {
            state: RwLock::default(),
            simulate_failure: AtomicBool::new(true),
        }
    }

    /// Switch simulated storage failures on or off.
    pub fn set_failing(&self, failing: bool) {
        self.simulate_failure.store(failing, Ordering::SeqCst);
    }

    /// Number of users stored.
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Number of response rows stored.
    pub async fn response_count(&self) -> usize {
        self.state.read().await.responses.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!("In-memory store simulating storage failure");
            Err(StoreError::Database("Simulated storage failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl SchedulingStore for InMemorySchedulingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn create_event(&self, new_event: NewEvent) -> Result<Event, StoreError> {
        self.check_available()?;
        let mut state = self.state.write().await;

        if state.event(&new_event.hash_id).is_some() {
            return Err(StoreError::Database(format!(
                "duplicate event handle {}",
                new_event.hash_id
            )));
        }

        let organizer_id = state.insert_user(new_event.organizer);
        let event = Event {
            id: state.next_id(),
            hash_id: new_event.hash_id,
            title: new_event.title,
            description: new_event.description,
            organizer_id,
            created_at: Utc::now(),
        };
        for date in new_event.dates {
            let id = state.next_id();
            state.date_options.push(EventDateOption {
                id,
                event_id: event.id,
                date,
            });
        }
        state.events.push(event.clone());

        Ok(event)
    }

    async fn find_event_summary(
        &self,
        hash_id: &str,
    ) -> Result<Option<EventSummary>, StoreError> {
        let state = self.state.read().await;
        let summary = state.event(hash_id).map(|event| {
            let organizer = state.user(event.organizer_id);
            EventSummary {
                id: event.id,
                hash_id: event.hash_id.clone(),
                title: event.title.clone(),
                description: event.description.clone(),
                organizer_name: organizer.map(|u| u.name.clone()).unwrap_or_default(),
                organizer_email: organizer.map(|u| u.email.clone()).unwrap_or_default(),
            }
        });
        Ok(summary)
    }

    async fn list_date_options(&self, hash_id: &str) -> Result<Vec<EventDateOption>, StoreError> {
        Ok(self.state.read().await.options_for(hash_id))
    }

    async fn list_attendees(&self, hash_id: &str) -> Result<Vec<Attendee>, StoreError> {
        let state = self.state.read().await;
        let option_ids: BTreeSet<i64> = state.options_for(hash_id).iter().map(|o| o.id).collect();
        let attendee_ids: BTreeSet<i64> = state
            .responses
            .keys()
            .filter(|(date_id, _)| option_ids.contains(date_id))
            .map(|(_, attendee_id)| *attendee_id)
            .collect();

        Ok(attendee_ids
            .into_iter()
            .filter_map(|id| state.user(id))
            .map(|user| Attendee {
                id: user.id,
                name: user.name.clone(),
            })
            .collect())
    }

    async fn list_attendee_responses(
        &self,
        hash_id: &str,
        attendee_id: i64,
    ) -> Result<Vec<DateResponse>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .options_for(hash_id)
            .iter()
            .filter_map(|option| {
                state
                    .responses
                    .get(&(option.id, attendee_id))
                    .map(|response| DateResponse::new(option.id, *response))
            })
            .collect())
    }

    async fn create_attendee(
        &self,
        attendee: NewUser,
        responses: &[DateResponse],
    ) -> Result<i64, StoreError> {
        self.check_available()?;
        let mut state = self.state.write().await;
        state.check_date_options_exist(responses)?;

        let attendee_id = state.insert_user(attendee);
        for response in responses {
            state
                .responses
                .insert((response.event_date_id, attendee_id), response.response);
        }
        Ok(attendee_id)
    }

    async fn replace_responses(
        &self,
        attendee_id: i64,
        responses: &[DateResponse],
    ) -> Result<(), StoreError> {
        self.check_available()?;
        let mut state = self.state.write().await;
        if state.user(attendee_id).is_none() {
            return Err(StoreError::NotFound(format!("User {} not found", attendee_id)));
        }
        state.check_date_options_exist(responses)?;

        for response in responses {
            state
                .responses
                .insert((response.event_date_id, attendee_id), response.response);
        }
        Ok(())
    }
}
