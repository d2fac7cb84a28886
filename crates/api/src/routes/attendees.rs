//! Attendee availability handlers.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{
    CreateAttendeeRequest, CreateAttendeeResponse, EventDateOption, ReplaceResponsesRequest,
    ReplaceResponsesResponse,
};
use domain::services::{responses_from_form, StoreError};
use tracing::{error, info};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_attendee_created, record_responses_replaced};
use crate::routes::events::event_not_found;

/// Submit a new attendee's availability.
///
/// POST /api/v1/events/:hash/attendees
///
/// The attendee gets one response row per date option of the event; options
/// not selected are stored as "no".
pub async fn create_attendee(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
    payload: Result<Json<CreateAttendeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAttendeeResponse>), ApiError> {
    let Json(request) = payload?;
    let attendee = request.attendee()?;

    let options = event_date_options(&state, &hash_id).await?;
    let responses = responses_from_form(&options, request.selections());

    let attendee_id = state
        .store
        .create_attendee(attendee, &responses)
        .await
        .map_err(|e| log_store_error(&hash_id, "create attendee", e))?;

    record_attendee_created();
    info!(
        hash_id = %hash_id,
        attendee_id = attendee_id,
        yes_count = responses.iter().filter(|r| r.response).count(),
        "Attendee responded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateAttendeeResponse { id: attendee_id }),
    ))
}

/// Replace an attendee's availability for every date option of the event.
///
/// PUT /api/v1/events/:hash/attendees/:id
///
/// An empty body counts as "no" for every date.
pub async fn replace_responses(
    State(state): State<AppState>,
    Path((hash_id, attendee_id)): Path<(String, i64)>,
    body: Bytes,
) -> Result<Json<ReplaceResponsesResponse>, ApiError> {
    let request: ReplaceResponsesRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ReplaceResponsesRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))?
    };

    let (summary, options, existing) = tokio::try_join!(
        state.store.find_event_summary(&hash_id),
        state.store.list_date_options(&hash_id),
        state.store.list_attendee_responses(&hash_id, attendee_id),
    )?;
    if summary.is_none() {
        return Err(event_not_found(&hash_id));
    }
    if existing.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Attendee {} has not responded to event {}",
            attendee_id, hash_id
        )));
    }

    let responses = responses_from_form(&options, request.selections());
    state
        .store
        .replace_responses(attendee_id, &responses)
        .await
        .map_err(|e| log_store_error(&hash_id, "replace responses", e))?;

    record_responses_replaced();
    info!(
        hash_id = %hash_id,
        attendee_id = attendee_id,
        yes_count = responses.iter().filter(|r| r.response).count(),
        "Attendee responses replaced"
    );

    Ok(Json(ReplaceResponsesResponse {
        id: attendee_id,
        responses,
    }))
}

/// Date options of an existing event; 404 if the event is unknown.
async fn event_date_options(
    state: &AppState,
    hash_id: &str,
) -> Result<Vec<EventDateOption>, ApiError> {
    let (summary, options) = tokio::try_join!(
        state.store.find_event_summary(hash_id),
        state.store.list_date_options(hash_id),
    )?;
    match summary {
        Some(_) => Ok(options),
        None => Err(event_not_found(hash_id)),
    }
}

fn log_store_error(hash_id: &str, action: &str, err: StoreError) -> ApiError {
    error!(hash_id = %hash_id, error = %err, "Failed to {}", action);
    err.into()
}
