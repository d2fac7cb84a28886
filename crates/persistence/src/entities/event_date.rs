//! Event date option entity (database row mapping).

use chrono::NaiveDate;
use domain::models::EventDateOption;
use sqlx::FromRow;

/// Database row mapping for the event_dates table.
#[derive(Debug, Clone, FromRow)]
pub struct EventDateEntity {
    pub id: i64,
    pub event_id: i64,
    pub date: NaiveDate,
}

impl From<EventDateEntity> for EventDateOption {
    fn from(entity: EventDateEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            date: entity.date,
        }
    }
}
