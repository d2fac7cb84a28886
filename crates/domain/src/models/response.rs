//! Attendee availability response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use super::user::NewUser;

/// One attendee's yes/no availability for one date option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DateResponse {
    pub event_date_id: i64,
    pub response: bool,
}

impl DateResponse {
    pub fn new(event_date_id: i64, response: bool) -> Self {
        Self {
            event_date_id,
            response,
        }
    }
}

/// A serialized form control: `{ "name": ..., "value": ... }`.
///
/// The attendee page submits its inputs in this shape. For the response list
/// `name` carries the date option id and `value` the checkbox state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the trimmed text value, if the value is a non-blank string.
    pub fn text(&self) -> Option<&str> {
        self.value
            .as_str()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Body of `POST /api/v1/events/:hash/attendees`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendeeRequest {
    #[serde(default)]
    pub attendee_name: Option<FormField>,
    #[serde(default)]
    pub attendee_email: Option<FormField>,
    /// Sparse list of date options the attendee marked.
    #[serde(default)]
    pub responses: Option<Vec<FormField>>,
}

impl CreateAttendeeRequest {
    /// Extracts the attendee's identity, failing if name or email is missing or blank.
    pub fn attendee(&self) -> Result<NewUser, ValidationErrors> {
        let name = self.attendee_name.as_ref().and_then(FormField::text);
        let email = self.attendee_email.as_ref().and_then(FormField::text);

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewUser::new(name, email)),
            (name, email) => {
                let mut errors = ValidationErrors::new();
                if name.is_none() {
                    errors.add("attendeeName", required("Attendee name is required"));
                }
                if email.is_none() {
                    errors.add("attendeeEmail", required("Attendee email is required"));
                }
                Err(errors)
            }
        }
    }

    pub fn selections(&self) -> &[FormField] {
        self.responses.as_deref().unwrap_or_default()
    }
}

/// Body of `PUT /api/v1/events/:hash/attendees/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceResponsesRequest {
    #[serde(default)]
    pub responses: Option<Vec<FormField>>,
}

impl ReplaceResponsesRequest {
    pub fn selections(&self) -> &[FormField] {
        self.responses.as_deref().unwrap_or_default()
    }
}

/// Response after creating an attendee.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAttendeeResponse {
    pub id: i64,
}

/// Response after replacing an attendee's responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceResponsesResponse {
    pub id: i64,
    pub responses: Vec<DateResponse>,
}

fn required(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("required");
    err.message = Some(message.into());
    err
}
