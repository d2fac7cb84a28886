//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod event;
pub mod event_date;
pub mod response;
pub mod user;

pub use event::{EventEntity, EventSummaryEntity};
pub use event_date::EventDateEntity;
pub use response::EventDateResponseEntity;
pub use user::AttendeeEntity;
