//! Remote event repository tests against a local stub endpoint
//!
//! - get_all returns one event per remote map key, ids taken from the keys
//! - get_by_id scans get_all; absence is Ok(None)
//! - get_filtered keeps exactly the events of one calendar month, in order
//! - One invalid record fails the whole batch (fail-closed)
//! - Transport failures, bad statuses, and exceeded timeouts are errors

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use eventdb::events::{EventRepository, EventsError, RemoteConfig};

// =============================================================================
// Test Utilities
// =============================================================================

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn events_app(body: Value) -> Router {
    Router::new().route(
        "/events.json",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

async fn repository_for(body: Value) -> EventRepository {
    let base_uri = spawn_server(events_app(body)).await;
    EventRepository::new(RemoteConfig::new(base_uri)).unwrap()
}

fn event_body(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "description": "A dummy description.",
        "image": "images/event.jpg",
        "location": "Somestreet 25, 12345 San Somewhereo",
        "date": date,
        "isFeatured": false
    })
}

fn valid_dataset() -> Value {
    json!({
        "e1": event_body("Networking for introverts", "2021-05-12"),
        "e2": event_body("Networking for extroverts", "2021-05-30"),
        "e3": event_body("Programming for everyone", "2022-04-10"),
    })
}

// =============================================================================
// get_all
// =============================================================================

#[tokio::test]
async fn test_get_all_returns_one_event_per_key_in_order() {
    let repository = repository_for(valid_dataset()).await;

    let events = repository.get_all().await.unwrap();

    assert_eq!(events.len(), 3);
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2", "e3"]);
    assert_eq!(events[0].title, "Networking for introverts");
}

#[tokio::test]
async fn test_get_all_fails_closed_on_one_bad_date() {
    let mut dataset = valid_dataset();
    dataset["e2"]["date"] = json!("2021/05/30");
    let repository = repository_for(dataset).await;

    let err = repository.get_all().await.unwrap_err();
    match err {
        EventsError::Validation(e) => assert!(e.names_field("date")),
        other => panic!("expected validation error, got: {}", other),
    }
}

#[tokio::test]
async fn test_get_all_fails_closed_on_missing_date() {
    let mut dataset = valid_dataset();
    dataset["e3"]
        .as_object_mut()
        .unwrap()
        .remove("date");
    let repository = repository_for(dataset).await;

    let err = repository.get_all().await.unwrap_err();
    match err {
        EventsError::Validation(e) => assert!(e.names_field("date")),
        other => panic!("expected validation error, got: {}", other),
    }
}

#[tokio::test]
async fn test_get_all_fails_closed_on_bad_id_prefix() {
    let mut dataset = valid_dataset();
    let body = dataset["e1"].clone();
    dataset.as_object_mut().unwrap().insert("x1".to_string(), body);
    let repository = repository_for(dataset).await;

    let err = repository.get_all().await.unwrap_err();
    match err {
        EventsError::Validation(e) => assert!(e.names_field("id")),
        other => panic!("expected validation error, got: {}", other),
    }
}

#[tokio::test]
async fn test_get_all_empty_dataset_is_empty_not_error() {
    let repository = repository_for(json!({})).await;

    assert!(repository.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_all_rejects_non_object_payload() {
    let repository = repository_for(json!([1, 2, 3])).await;

    let err = repository.get_all().await.unwrap_err();
    assert!(matches!(err, EventsError::Payload { .. }));
}

// =============================================================================
// get_by_id
// =============================================================================

#[tokio::test]
async fn test_get_by_id_finds_exact_match() {
    let repository = repository_for(valid_dataset()).await;

    let event = repository.get_by_id("e2").await.unwrap().unwrap();
    assert_eq!(event.id, "e2");
    assert_eq!(event.title, "Networking for extroverts");
}

#[tokio::test]
async fn test_get_by_id_absent_is_none_not_error() {
    let repository = repository_for(valid_dataset()).await;

    assert!(repository.get_by_id("e999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_id_agrees_with_manual_scan() {
    let repository = repository_for(valid_dataset()).await;

    let all = repository.get_all().await.unwrap();
    for id in ["e1", "e2", "e3", "e999"] {
        let via_lookup = repository.get_by_id(id).await.unwrap();
        let via_scan = all.iter().find(|e| e.id == id).cloned();
        assert_eq!(via_lookup, via_scan);
    }
}

// =============================================================================
// get_filtered
// =============================================================================

#[tokio::test]
async fn test_get_filtered_keeps_only_that_month_in_order() {
    let repository = repository_for(valid_dataset()).await;

    let may_2021 = repository.get_filtered(2021, 5).await.unwrap();
    let ids: Vec<&str> = may_2021.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2"]);

    let april_2022 = repository.get_filtered(2022, 4).await.unwrap();
    assert_eq!(april_2022.len(), 1);
    assert_eq!(april_2022[0].id, "e3");
}

#[tokio::test]
async fn test_get_filtered_is_a_subset_and_idempotent() {
    let repository = repository_for(valid_dataset()).await;

    let all = repository.get_all().await.unwrap();
    let first = repository.get_filtered(2021, 5).await.unwrap();
    let second = repository.get_filtered(2021, 5).await.unwrap();

    assert_eq!(first, second);
    assert!(first.iter().all(|e| all.contains(e)));
}

#[tokio::test]
async fn test_get_filtered_empty_month_and_out_of_range_month() {
    let repository = repository_for(valid_dataset()).await;

    assert!(repository.get_filtered(2021, 1).await.unwrap().is_empty());
    assert!(repository.get_filtered(2021, 0).await.unwrap().is_empty());
    assert!(repository.get_filtered(2021, 13).await.unwrap().is_empty());
}

// =============================================================================
// Transport Failures
// =============================================================================

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let app = Router::new().route(
        "/events.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_uri = spawn_server(app).await;
    let repository = EventRepository::new(RemoteConfig::new(base_uri)).unwrap();

    let err = repository.get_all().await.unwrap_err();
    match err {
        EventsError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got: {}", other),
    }
}

#[tokio::test]
async fn test_exceeding_fetch_timeout_is_transient_error() {
    let app = Router::new().route(
        "/events.json",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_uri = spawn_server(app).await;
    let config = RemoteConfig::new(base_uri).with_fetch_timeout(Duration::from_millis(200));
    let repository = EventRepository::new(config).unwrap();

    let err = repository.get_all().await.unwrap_err();
    assert!(matches!(err, EventsError::Timeout { .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_remote_is_transient_error() {
    // Bind a port, learn it, then free it before the repository connects.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let repository =
        EventRepository::new(RemoteConfig::new(format!("http://{}", addr))).unwrap();

    let err = repository.get_all().await.unwrap_err();
    assert!(matches!(err, EventsError::Request { .. }));
    assert!(err.is_transient());
}
