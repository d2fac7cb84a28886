//! Repository implementations for database operations.

pub mod event;
pub mod event_date;
pub mod response;
pub mod user;

pub use event::EventRepository;
pub use event_date::EventDateRepository;
pub use response::ResponseRepository;
pub use user::UserRepository;
