//! Event summary assembly.
//!
//! Joins the event, its organizer, its date options and every attendee's
//! responses into one [`EventSummaryView`]. The store reads are issued
//! concurrently and the whole assembly fails if any of them fails.

use std::collections::HashMap;

use futures::future::try_join_all;
use shared::dates::format_date_label;

use super::store::{SchedulingStore, StoreError};
use crate::models::{
    Attendee, AttendeeRow, DateColumn, DateResponse, EventDateOption, EventSummary,
    EventSummaryView, OrganizerInfo,
};

/// Fetches everything shown on an event page and assembles the view model.
///
/// Returns [`StoreError::NotFound`] for an unknown handle.
pub async fn assemble_event_summary(
    store: &dyn SchedulingStore,
    hash_id: &str,
) -> Result<EventSummaryView, StoreError> {
    let attendee_responses = async {
        let attendees = store.list_attendees(hash_id).await?;
        let rows = try_join_all(attendees.into_iter().map(|attendee| async move {
            let responses = store.list_attendee_responses(hash_id, attendee.id).await?;
            Ok::<_, StoreError>((attendee, responses))
        }))
        .await?;
        Ok::<_, StoreError>(rows)
    };

    let (summary, options, attendees) = tokio::try_join!(
        store.find_event_summary(hash_id),
        store.list_date_options(hash_id),
        attendee_responses,
    )?;

    let summary =
        summary.ok_or_else(|| StoreError::NotFound(format!("Event {} not found", hash_id)))?;

    tracing::debug!(
        hash_id = %hash_id,
        date_count = options.len(),
        attendee_count = attendees.len(),
        "Assembled event summary"
    );

    Ok(build_summary_view(summary, &options, attendees))
}

/// Builds the view model from already fetched data.
///
/// Each attendee's responses are aligned to `options`; a date option with no
/// stored response is shown as "no".
pub fn build_summary_view(
    summary: EventSummary,
    options: &[EventDateOption],
    attendees: Vec<(Attendee, Vec<DateResponse>)>,
) -> EventSummaryView {
    let attendees: Vec<AttendeeRow> = attendees
        .into_iter()
        .map(|(attendee, responses)| {
            let by_date: HashMap<i64, bool> = responses
                .iter()
                .map(|r| (r.event_date_id, r.response))
                .collect();
            AttendeeRow {
                id: attendee.id,
                name: attendee.name,
                responses: options
                    .iter()
                    .map(|o| DateResponse::new(o.id, by_date.get(&o.id).copied().unwrap_or(false)))
                    .collect(),
            }
        })
        .collect();

    let dates = options
        .iter()
        .enumerate()
        .map(|(column, option)| DateColumn {
            id: option.id,
            date: option.date,
            label: format_date_label(option.date),
            yes_count: attendees
                .iter()
                .filter(|row| row.responses[column].response)
                .count(),
        })
        .collect();

    EventSummaryView {
        hash_id: summary.hash_id,
        title: summary.title,
        description: summary.description,
        organizer: OrganizerInfo {
            name: summary.organizer_name,
            email: summary.organizer_email,
        },
        dates,
        attendees,
    }
}
