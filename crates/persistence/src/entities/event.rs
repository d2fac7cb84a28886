//! Event entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Event, EventSummary};
use sqlx::FromRow;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: i64,
    pub hash_id: String,
    pub title: String,
    pub description: String,
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            hash_id: entity.hash_id,
            title: entity.title,
            description: entity.description,
            organizer_id: entity.organizer_id,
            created_at: entity.created_at,
        }
    }
}

/// Event joined with its organizer.
#[derive(Debug, Clone, FromRow)]
pub struct EventSummaryEntity {
    pub id: i64,
    pub hash_id: String,
    pub title: String,
    pub description: String,
    // Organizer info
    pub organizer_name: String,
    pub organizer_email: String,
}

impl From<EventSummaryEntity> for EventSummary {
    fn from(entity: EventSummaryEntity) -> Self {
        Self {
            id: entity.id,
            hash_id: entity.hash_id,
            title: entity.title,
            description: entity.description,
            organizer_name: entity.organizer_name,
            organizer_email: entity.organizer_email,
        }
    }
}
