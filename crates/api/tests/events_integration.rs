//! Integration tests for event proposal and summary endpoints.

mod common;

use axum::http::{header, StatusCode};
use common::{
    create_test_app, create_test_app_with, create_test_attendee, create_test_event,
    date_option_ids, form_request, get_request, get_summary, parse_response_body,
    response_text, test_config, TestEventForm,
};
use domain::services::InMemorySchedulingStore;
use shared::identifier::{generate_hash_id, is_valid_hash_id};
use tower::ServiceExt;

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_landing_page_links_to_create() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(response_text(response).await.contains(r#"href="/create""#));
}

#[tokio::test]
async fn test_create_page_renders_form() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get_request("/create")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response_text(response).await;
    assert!(html.contains(r#"<form method="post" action="/events">"#));
    assert!(html.contains(r#"name="proposedEventDates""#));
}

#[tokio::test]
async fn test_share_page_uses_host_header() {
    let (app, _) = create_test_app();
    let hash_id = generate_hash_id();

    let request = axum::http::Request::builder()
        .uri(format!("/events/{}/share", hash_id))
        .header(header::HOST, "plans.example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response_text(response).await;
    let expected = format!("http:&#x2F;&#x2F;plans.example.com&#x2F;events&#x2F;{}", hash_id);
    assert!(html.contains(&expected), "share link missing in {}", html);
}

// ============================================================================
// POST /events
// ============================================================================

#[tokio::test]
async fn test_create_event_redirects_to_share_page() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(form_request("/events", TestEventForm::new().encode()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    let hash_id = location
        .strip_prefix("/events/")
        .and_then(|rest| rest.strip_suffix("/share"))
        .unwrap();
    assert!(is_valid_hash_id(hash_id));
    assert_eq!(store.user_count().await, 1);
}

#[tokio::test]
async fn test_create_event_stores_sorted_dates() {
    let (app, _) = create_test_app();
    let form = TestEventForm::new().with_dates("2024-03-05,2024-03-01");

    let hash_id = create_test_event(&app, &form).await;
    let summary = get_summary(&app, &hash_id).await;

    let dates: Vec<&str> = summary["dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-03-05"]);

    let labels: Vec<&str> = summary["dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Mar 1st", "Mar 5th"]);

    assert_eq!(summary["title"], "Board game night");
    assert_eq!(summary["organizer"]["name"], form.organizer_name.as_str());
    assert_eq!(summary["organizer"]["email"], form.email.as_str());
}

#[tokio::test]
async fn test_create_event_accepts_mixed_date_formats() {
    let (app, _) = create_test_app();
    let form = TestEventForm::new().with_dates("03/02/2024, 2024-03-01T18:00:00Z, ,2024-03-03");

    let hash_id = create_test_event(&app, &form).await;
    let summary = get_summary(&app, &hash_id).await;

    let dates: Vec<&str> = summary["dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);
}

#[tokio::test]
async fn test_create_event_missing_fields_returns_400() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(form_request("/events", "proposedEventDates=2024-03-01".into()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert_eq!(json["error"], "validation_error");
    let fields: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"organizer_name"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"proposed_event_name"));
    assert_eq!(store.user_count().await, 0);
}

#[tokio::test]
async fn test_create_event_invalid_date_returns_400() {
    let (app, store) = create_test_app();
    let form = TestEventForm::new().with_dates("2024-03-01,next tuesday");

    let response = app
        .oneshot(form_request("/events", form.encode()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert!(json["message"].as_str().unwrap().contains("next tuesday"));
    assert_eq!(store.user_count().await, 0);
}

#[tokio::test]
async fn test_create_event_without_dates_returns_400() {
    let (app, _) = create_test_app();
    let form = TestEventForm::new().with_dates(" , ");

    let response = app
        .oneshot(form_request("/events", form.encode()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_event_wrong_content_type_returns_json_400() {
    let (app, store) = create_test_app();

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/events")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(axum::body::Body::from(TestEventForm::new().encode()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert_eq!(json["error"], "validation_error");
    assert_eq!(store.user_count().await, 0);
}

#[tokio::test]
async fn test_create_event_duplicate_field_returns_json_400() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(form_request(
            "/events",
            "organizerName=Ada&organizerName=Grace".into(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert_eq!(json["error"], "validation_error");
    assert!(json["message"].as_str().unwrap().contains("organizerName"));
    assert_eq!(store.user_count().await, 0);
}

#[tokio::test]
async fn test_create_event_store_failure_returns_500() {
    let (app, _) = create_test_app_with(test_config(), InMemorySchedulingStore::failing());

    let response = app
        .oneshot(form_request("/events", TestEventForm::new().encode()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = parse_response_body(response).await;
    assert_eq!(json["message"], "An internal error occurred");
}

// ============================================================================
// GET /events/:hash and GET /api/v1/events/:hash
// ============================================================================

#[tokio::test]
async fn test_event_page_unknown_hash_returns_404() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(get_request(&format!("/events/{}", generate_hash_id())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response_text(response).await.contains("Event not found"));
}

#[tokio::test]
async fn test_summary_api_unknown_hash_returns_404() {
    let (app, _) = create_test_app();

    for hash_id in [generate_hash_id(), "short".to_string()] {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/events/{}", hash_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = parse_response_body(response).await;
        assert_eq!(json["error"], "not_found");
    }
}

#[tokio::test]
async fn test_event_page_renders_availability_grid() {
    let (app, _) = create_test_app();
    let hash_id = create_test_event(&app, &TestEventForm::new()).await;
    let ids = date_option_ids(&app, &hash_id).await;
    create_test_attendee(&app, &hash_id, &[ids[0]]).await;
    create_test_attendee(&app, &hash_id, &[ids[0], ids[2]]).await;

    let response = app
        .oneshot(get_request(&format!("/events/{}", hash_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response_text(response).await;
    assert!(html.contains("<th>Mar 1st</th><th>Mar 3rd</th><th>Mar 5th</th>"));
    assert!(html.contains(
        r#"<td class="yes-count">2</td><td class="yes-count">0</td><td class="yes-count">1</td>"#
    ));
    assert_eq!(html.matches("class=\"edit-attendee\"").count(), 2);
    assert!(html.contains(&format!(r#"data-hash="{}""#, hash_id)));
}

#[tokio::test]
async fn test_summary_every_attendee_has_every_date() {
    let (app, _) = create_test_app();
    let hash_id = create_test_event(&app, &TestEventForm::new()).await;
    let ids = date_option_ids(&app, &hash_id).await;

    create_test_attendee(&app, &hash_id, &[]).await;
    create_test_attendee(&app, &hash_id, &[ids[1]]).await;
    create_test_attendee(&app, &hash_id, &ids).await;

    let summary = get_summary(&app, &hash_id).await;
    let attendees = summary["attendees"].as_array().unwrap();
    assert_eq!(attendees.len(), 3);

    for attendee in attendees {
        let response_ids: Vec<i64> = attendee["responses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["event_date_id"].as_i64().unwrap())
            .collect();
        assert_eq!(response_ids, ids);
    }

    let counts: Vec<u64> = summary["dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["yes_count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2, 1]);
}
