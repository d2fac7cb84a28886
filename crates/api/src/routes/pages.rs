//! Server-rendered HTML pages.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::events::load_summary;
use crate::views;

/// GET /
pub async fn landing() -> Html<String> {
    Html(views::landing_page())
}

/// GET /create
pub async fn create_form() -> Html<String> {
    Html(views::create_page())
}

/// Share-link page for a freshly created event.
///
/// GET /events/:hash/share
///
/// The link is built from the request's `Host` header, falling back to the
/// configured listen address.
pub async fn share(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
    headers: HeaderMap,
) -> Html<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("{}:{}", state.config.server.host, state.config.server.port)
        });

    Html(views::share_page(&views::share_url(&host, &hash_id)))
}

/// Availability grid for an event.
///
/// GET /events/:hash
pub async fn event_page(State(state): State<AppState>, Path(hash_id): Path<String>) -> Response {
    match load_summary(&state, &hash_id).await {
        Ok(view) => Html(views::event_page(&view)).into_response(),
        Err(ApiError::NotFound(message)) => {
            (StatusCode::NOT_FOUND, Html(views::not_found_page(&message))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
