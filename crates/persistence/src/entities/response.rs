//! Availability response entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::DateResponse;
use sqlx::FromRow;

/// Database row mapping for the event_date_responses table.
#[derive(Debug, Clone, FromRow)]
pub struct EventDateResponseEntity {
    pub event_date_id: i64,
    pub attendee_id: i64,
    pub event_date_response: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<EventDateResponseEntity> for DateResponse {
    fn from(entity: EventDateResponseEntity) -> Self {
        DateResponse::new(entity.event_date_id, entity.event_date_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_entity_to_domain() {
        let entity = EventDateResponseEntity {
            event_date_id: 11,
            attendee_id: 4,
            event_date_response: true,
            updated_at: Utc::now(),
        };
        let response: DateResponse = entity.into();
        assert_eq!(response, DateResponse::new(11, true));
    }
}
