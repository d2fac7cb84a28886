//! Domain models for the event scheduler.

pub mod event;
pub mod response;
pub mod summary;
pub mod user;

pub use event::{CreateEventForm, Event, EventDateOption, EventSummary, NewEvent};
pub use response::{
    CreateAttendeeRequest, CreateAttendeeResponse, DateResponse, FormField,
    ReplaceResponsesRequest, ReplaceResponsesResponse,
};
pub use summary::{AttendeeRow, DateColumn, EventSummaryView, OrganizerInfo};
pub use user::{Attendee, NewUser, User};
