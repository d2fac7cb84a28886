//! User domain models.

use serde::{Deserialize, Serialize};

/// A person known to the system: an event organizer or an attendee.
///
/// Users are created once per event proposal or attendee submission and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Data required to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// An attendee of an event, as listed on the summary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Attendee {
    pub id: i64,
    pub name: String,
}
