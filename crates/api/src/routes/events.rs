//! Event proposal and summary handlers.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use domain::models::{CreateEventForm, EventSummaryView};
use domain::services::assemble_event_summary;
use shared::identifier::{generate_hash_id, is_valid_hash_id};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_event_created;

/// Create an event from the proposal form.
///
/// POST /events
///
/// Creates the organizer, the event and its date options (sorted ascending),
/// then redirects with `302 Found` to the event's share page.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Form<CreateEventForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = payload?;
    form.validate()?;

    let new_event = form.into_new_event(generate_hash_id())?;
    let date_count = new_event.dates.len();
    let event = state.store.create_event(new_event).await?;

    record_event_created(date_count);
    info!(
        event_id = event.id,
        hash_id = %event.hash_id,
        date_count = date_count,
        "Event created"
    );

    let location = format!("/events/{}/share", event.hash_id);
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Get the assembled availability summary of an event.
///
/// GET /api/v1/events/:hash
pub async fn get_event_summary(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
) -> Result<Json<EventSummaryView>, ApiError> {
    let view = load_summary(&state, &hash_id).await?;
    Ok(Json(view))
}

/// Assembles the summary view, rejecting malformed handles without a store round trip.
pub(crate) async fn load_summary(
    state: &AppState,
    hash_id: &str,
) -> Result<EventSummaryView, ApiError> {
    if !is_valid_hash_id(hash_id) {
        return Err(event_not_found(hash_id));
    }
    Ok(assemble_event_summary(state.store.as_ref(), hash_id).await?)
}

pub(crate) fn event_not_found(hash_id: &str) -> ApiError {
    ApiError::NotFound(format!("Event {} not found", hash_id))
}
