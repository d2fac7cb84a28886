use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use domain::services::SchedulingStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{attendees, events, health, pages};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchedulingStore>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<dyn SchedulingStore>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        // Development: allow any origin
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // HTML pages and the form post that creates events
    let page_routes = Router::new()
        .route("/", get(pages::landing))
        .route("/create", get(pages::create_form))
        .route("/events", post(events::create_event))
        .route("/events/:hash", get(pages::event_page))
        .route("/events/:hash/share", get(pages::share));

    // JSON API (v1)
    let api_routes = Router::new()
        .route("/api/v1/events/:hash", get(events::get_event_summary))
        .route(
            "/api/v1/events/:hash/attendees",
            post(attendees::create_attendee),
        )
        .route(
            "/api/v1/events/:hash/attendees/:id",
            put(attendees::replace_responses),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .merge(public_routes)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
