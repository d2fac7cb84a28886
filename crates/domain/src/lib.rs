//! Domain layer for the event scheduler.
//!
//! This crate contains:
//! - Domain models (User, Event, EventDateOption, DateResponse, summary view)
//! - Response aggregation and summary assembly
//! - The `SchedulingStore` persistence seam and an in-memory implementation

pub mod models;
pub mod services;
