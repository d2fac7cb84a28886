//! Shared utilities and common types for the event scheduler.
//!
//! This crate provides common functionality used across all other crates:
//! - Event handle generation
//! - Date parsing and display formatting
//! - Common validation logic

pub mod dates;
pub mod identifier;
pub mod validation;
