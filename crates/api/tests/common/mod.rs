//! Common test utilities for integration tests.
//!
//! The router is driven with `tower::ServiceExt::oneshot` against the
//! in-memory scheduling store, so no database is needed.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use event_scheduler_api::{
    app::create_app,
    config::{Config, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
};
use domain::services::InMemorySchedulingStore;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use std::sync::Arc;
use tower::ServiceExt;

/// Test configuration; the database is never contacted.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            max_body_size: 64 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://unused@localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 1,
            idle_timeout_secs: 60,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
    }
}

/// Create a test application router together with its backing store.
pub fn create_test_app() -> (Router, Arc<InMemorySchedulingStore>) {
    create_test_app_with(test_config(), InMemorySchedulingStore::new())
}

pub fn create_test_app_with(
    config: Config,
    store: InMemorySchedulingStore,
) -> (Router, Arc<InMemorySchedulingStore>) {
    let store = Arc::new(store);
    let app = create_app(config, store.clone());
    (app, store)
}

/// Proposal form fields, as posted by the `/create` page.
#[derive(Debug, Clone)]
pub struct TestEventForm {
    pub organizer_name: String,
    pub email: String,
    pub title: String,
    pub description: String,
    pub dates: String,
}

impl TestEventForm {
    pub fn new() -> Self {
        Self {
            organizer_name: Name().fake(),
            email: SafeEmail().fake(),
            title: "Board game night".to_string(),
            description: "Bring snacks".to_string(),
            dates: "2024-03-05,2024-03-01,2024-03-03".to_string(),
        }
    }

    pub fn with_dates(mut self, dates: &str) -> Self {
        self.dates = dates.to_string();
        self
    }

    pub fn encode(&self) -> String {
        [
            ("organizerName", &self.organizer_name),
            ("email", &self.email),
            ("proposedEventName", &self.title),
            ("proposedEventDescription", &self.description),
            ("proposedEventDates", &self.dates),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, form_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

impl Default for TestEventForm {
    fn default() -> Self {
        Self::new()
    }
}

fn form_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// Build a form POST request.
pub fn form_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Helper to read a response body as text.
pub async fn response_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Propose an event through `POST /events` and return its handle.
pub async fn create_test_event(app: &Router, form: &TestEventForm) -> String {
    let response = app
        .clone()
        .oneshot(form_request("/events", form.encode()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let location = response.headers()[header::LOCATION].to_str().unwrap();
    location
        .strip_prefix("/events/")
        .and_then(|rest| rest.strip_suffix("/share"))
        .unwrap_or_else(|| panic!("Unexpected redirect location: {}", location))
        .to_string()
}

/// Fetch the JSON summary of an event.
pub async fn get_summary(app: &Router, hash_id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/events/{}", hash_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    parse_response_body(response).await
}

/// Date option ids of an event, in date order.
pub async fn date_option_ids(app: &Router, hash_id: &str) -> Vec<i64> {
    get_summary(app, hash_id).await["dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect()
}

/// Attendee submission body in the shape the event page sends.
pub fn attendee_body(name: &str, email: &str, yes_ids: &[i64]) -> serde_json::Value {
    serde_json::json!({
        "attendeeName": { "name": "attendeeName", "value": name },
        "attendeeEmail": { "name": "attendeeEmail", "value": email },
        "responses": yes_ids
            .iter()
            .map(|id| serde_json::json!({ "name": id.to_string(), "value": true }))
            .collect::<Vec<_>>(),
    })
}

/// Submit an attendee and return the new attendee id.
pub async fn create_test_attendee(app: &Router, hash_id: &str, yes_ids: &[i64]) -> i64 {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/events/{}/attendees", hash_id),
            attendee_body(&name, &email, yes_ids),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await["id"].as_i64().unwrap()
}
