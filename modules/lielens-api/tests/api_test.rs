use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use lielens_api::{build_router, AppState};
use lielens_common::Config;
use lielens_core::{Analyzer, ContentResolver};

/// Router backed by an unconfigured analyzer: the canned demo verdict plays
/// the role of the model, so no network or environment setup is needed.
fn demo_mode_app() -> Router {
    let state = Arc::new(AppState {
        analyzer: Analyzer::new(&Config::demo()),
        resolver: ContentResolver::new(),
    });
    build_router(state)
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = demo_mode_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn analyze_text_in_demo_mode_returns_canned_verdict() {
    let app = demo_mode_app();

    let response = app
        .oneshot(analyze_request(
            r#"{"content": "Scientists shocked by simple trick!", "content_type": "text"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    for key in [
        "analysis_summary",
        "detected_tactics",
        "cognitive_biases",
        "fact_check_flags",
        "educational_insights",
        "recommendations",
        "confidence_metrics",
        "metadata",
        "source_info",
    ] {
        assert!(body.get(key).is_some(), "missing {key}");
    }

    assert_eq!(body["confidence_metrics"]["analysis_confidence"], 0);
    assert_eq!(body["metadata"]["model_used"], "demo-mode");
    assert_eq!(body["source_info"]["content_type"], "direct_text");
}

#[tokio::test]
async fn analyze_auto_classifies_plain_text() {
    let app = demo_mode_app();

    let response = app
        .oneshot(analyze_request(
            r#"{"content": "just a perfectly ordinary sentence with no links"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["source_info"]["content_type"], "direct_text");
}

#[tokio::test]
async fn analyze_rejects_short_content() {
    let app = demo_mode_app();

    let response = app
        .oneshot(analyze_request(r#"{"content": "too short"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("at least"));
}

#[tokio::test]
async fn analyze_rejects_oversized_content() {
    let app = demo_mode_app();

    let content = "a".repeat(10_001);
    let response = app
        .oneshot(analyze_request(&format!(r#"{{"content": "{content}"}}"#)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_rejects_unknown_content_type() {
    let app = demo_mode_app();

    let response = app
        .oneshot(analyze_request(
            r#"{"content": "0123456789", "content_type": "carrier-pigeon"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_unreachable_url_returns_400_naming_the_url() {
    let app = demo_mode_app();

    // Nothing listens on the discard port; the fetch fails fast.
    let response = app
        .oneshot(analyze_request(
            r#"{"content": "http://127.0.0.1:9/article", "content_type": "url"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("http://127.0.0.1:9/article"));
    assert!(message.contains("Could not fetch URL content"));
}

#[tokio::test]
async fn demo_endpoint_returns_analysis_without_source_info() {
    let app = demo_mode_app();

    let response = app
        .oneshot(Request::builder().uri("/demo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["metadata"]["model_used"], "demo-mode");
    assert!(body.get("source_info").is_none());
}
