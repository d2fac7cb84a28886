//! HTTP route handlers.

pub mod attendees;
pub mod events;
pub mod health;
pub mod pages;
