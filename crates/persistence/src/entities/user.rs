//! Attendee row mapping.

use domain::models::Attendee;
use sqlx::FromRow;

/// A user who answered at least one date option of an event.
#[derive(Debug, Clone, FromRow)]
pub struct AttendeeEntity {
    pub id: i64,
    pub name: String,
}

impl From<AttendeeEntity> for Attendee {
    fn from(entity: AttendeeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
