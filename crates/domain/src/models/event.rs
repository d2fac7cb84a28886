//! Event domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::dates::{parse_date_list, DateParseError};
use validator::Validate;

use super::user::NewUser;

/// A proposed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: i64,
    /// Public opaque handle used in shareable URLs.
    pub hash_id: String,
    pub title: String,
    pub description: String,
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Event joined with its organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventSummary {
    pub id: i64,
    pub hash_id: String,
    pub title: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_email: String,
}

/// One candidate date proposed by the organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventDateOption {
    pub id: i64,
    pub event_id: i64,
    pub date: NaiveDate,
}

/// Everything needed to persist a new event in one unit of work.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub hash_id: String,
    pub title: String,
    pub description: String,
    pub organizer: NewUser,
    /// Candidate dates, sorted ascending.
    pub dates: Vec<NaiveDate>,
}

/// Event proposal form as submitted from the `/create` page.
///
/// Field names follow the HTML form; missing fields deserialize to empty
/// strings so that they are reported as validation errors.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventForm {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 200, message = "Organizer name is too long"))]
    pub organizer_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 200, message = "Event name is too long"))]
    pub proposed_event_name: String,

    pub proposed_event_description: String,

    #[validate(custom(function = "shared::validation::validate_date_list"))]
    pub proposed_event_dates: String,
}

impl CreateEventForm {
    /// Converts a validated form into a [`NewEvent`] under the given handle.
    pub fn into_new_event(self, hash_id: String) -> Result<NewEvent, DateParseError> {
        let dates = parse_date_list(&self.proposed_event_dates)?;
        Ok(NewEvent {
            hash_id,
            title: self.proposed_event_name.trim().to_string(),
            description: self.proposed_event_description.trim().to_string(),
            organizer: NewUser::new(self.organizer_name.trim(), self.email.trim()),
            dates,
        })
    }
}
