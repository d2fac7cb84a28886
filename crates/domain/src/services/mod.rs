//! Domain services for the event scheduler.
//!
//! Services contain business logic that operates on domain models.

pub mod aggregation;
pub mod memory_store;
pub mod store;
pub mod summary;

pub use aggregation::{aggregate_responses, is_truthy, parse_yes_selections, responses_from_form};
pub use memory_store::InMemorySchedulingStore;
pub use store::{SchedulingStore, StoreError};
pub use summary::{assemble_event_summary, build_summary_view};
