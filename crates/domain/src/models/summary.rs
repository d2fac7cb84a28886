//! Display-ready event summary view model.

use chrono::NaiveDate;
use serde::Serialize;

use super::response::DateResponse;

/// Organizer details shown on the summary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizerInfo {
    pub name: String,
    pub email: String,
}

/// A date option column of the availability grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateColumn {
    pub id: i64,
    pub date: NaiveDate,
    /// Formatted as "MMM Do", e.g. `Jan 2nd`.
    pub label: String,
    /// Number of attendees available on this date.
    pub yes_count: usize,
}

/// One attendee row of the availability grid.
///
/// `responses` holds one entry per date column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeRow {
    pub id: i64,
    pub name: String,
    pub responses: Vec<DateResponse>,
}

/// Everything the summary page needs, assembled from several store reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummaryView {
    pub hash_id: String,
    pub title: String,
    pub description: String,
    pub organizer: OrganizerInfo,
    pub dates: Vec<DateColumn>,
    pub attendees: Vec<AttendeeRow>,
}
