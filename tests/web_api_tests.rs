//! Integration tests for the Team Colors Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use teamcolors::web::{create_router, ApiState};

mod fixtures;
use fixtures::sample_data;

fn create_test_app() -> axum::Router {
    create_router(ApiState::new(sample_data()))
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_list_conferences() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/conferences").await;

    assert_eq!(status, StatusCode::OK);
    let conferences = json["conferences"].as_array().unwrap();
    assert_eq!(conferences.len(), 2);
    assert_eq!(conferences[0]["key"], "SEC");
    assert_eq!(conferences[1]["full_name"], "Atlantic Coast Conference");
}

#[tokio::test]
async fn test_get_conference() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/conferences/SEC").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cards"][0]["school"], "Test U");
    assert_eq!(json["cards"][0]["swatches"][0]["hex"], "#FF0000");
}

#[tokio::test]
async fn test_get_conference_not_found() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/conferences/XYZ").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("XYZ"));
}

#[tokio::test]
async fn test_export_dedups_and_keeps_order() {
    let app = create_test_app();
    let body = json!({
        "format": "detailed",
        "colors": [
            { "hex": "#FF0000", "school": "Test U", "type": "Primary" },
            { "hex": "#0000FF", "school": "Test U", "type": "Secondary" },
            { "hex": "#FF0000", "school": "Test U", "type": "Accent" }
        ]
    });

    let (status, json) = post_json(&app, "/api/export", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(
        json["text"],
        "Test U - Primary - #FF0000\nTest U - Secondary - #0000FF"
    );
}

#[tokio::test]
async fn test_export_defaults_to_hex_only() {
    let app = create_test_app();
    let body = json!({
        "colors": [{ "hex": "#003087", "school": "Blue Tech", "type": "Primary" }]
    });

    let (status, json) = post_json(&app, "/api/export", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "#003087");
}

#[tokio::test]
async fn test_export_empty_is_bad_request() {
    let app = create_test_app();
    let (status, json) = post_json(&app, "/api/export", json!({ "colors": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No colors selected");
}
