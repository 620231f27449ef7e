// HTTP API tests: drive the router in-process with tower's `oneshot`,
// no listening socket involved.

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use plagiscan::lexicon::bundled::bundled;
use plagiscan::web::{build_router, AppState};

fn app() -> Router {
    build_router(AppState {
        lexicon: Arc::new(bundled().unwrap()),
    })
}

async fn post_check(body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/check-plagiarism")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn check_returns_one_result_per_pair() {
    let body = json!({
        "files": [
            {"email": "a@uni.edu", "text": "The automobile was fast."},
            {"email": "b@uni.edu", "text": "The car was fast."},
            {"email": "c@uni.edu", "text": "Geese and mice."}
        ]
    });
    let (status, json) = post_check(&body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0],
        json!({
            "email": "a@uni.edu",
            "with": "b@uni.edu",
            "percentage": 100.0,
            "status": "Complete Plagiarism"
        })
    );
    assert_eq!(results[2]["status"], "No Plagiarism");
}

#[tokio::test]
async fn single_file_returns_empty_list() {
    let (status, json) =
        post_check(r#"{"files": [{"email": "solo@uni.edu", "text": "Alone."}]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn empty_files_is_bad_request() {
    let (status, json) = post_check(r#"{"files": []}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No files provided");
}

#[tokio::test]
async fn missing_files_is_bad_request() {
    let (status, json) = post_check("{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No files provided");
}

#[tokio::test]
async fn incomplete_entry_is_mismatch() {
    let (status, json) = post_check(
        r#"{"files": [{"email": "a@uni.edu", "text": "hello"}, {"email": "b@uni.edu"}]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Mismatch between texts and emails");
}

#[tokio::test]
async fn duplicate_email_is_bad_request() {
    let (status, json) = post_check(
        r#"{"files": [{"email": "a@uni.edu", "text": "one"}, {"email": "a@uni.edu", "text": "two"}]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("a@uni.edu"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, json) = post_check("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
