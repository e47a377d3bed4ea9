// HTTP API tests: drive the axum router in-process with tower's oneshot.

#![cfg(feature = "web")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use safedose::config::Config;
use safedose::scoring::analysis::Analyzer;
use safedose::web::{build_router, AppState};

fn app_with(config: Config) -> Router {
    build_router(AppState::new(config, Analyzer::new().unwrap()))
}

fn app() -> Router {
    app_with(Config::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_endpoints() {
    for uri in ["/health", "/api/v1/health"] {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "SafeDose.ai API is running");
    }
}

#[tokio::test]
async fn detect_misinformation_endpoint() {
    let (status, body) = post_json(
        app(),
        "/api/v1/detect-misinformation",
        json!({ "text": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0.0);
    assert_eq!(body["confidence"], 0.3);
    assert_eq!(body["detected_patterns"], json!([]));
}

#[tokio::test]
async fn analyze_persuasion_endpoint() {
    let (status, body) = post_json(
        app(),
        "/api/v1/analyze-persuasion",
        json!({ "text": "fear fear fear" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 1.0);
    assert_eq!(body["techniques_detected"], json!(["emotional_appeal: 3 instances"]));
}

#[tokio::test]
async fn trusted_alternatives_endpoint() {
    let (status, body) = post_json(
        app(),
        "/api/v1/get-trusted-alternatives",
        json!({ "text": "covid and the election", "source_url": "https://www.snopes.com/article" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_verification"]["is_fact_check"], true);
    assert_eq!(body["source_verification"]["credibility_score"], 1.0);
    assert_eq!(body["trust_score"], 1.0);
    assert_eq!(body["alternative_sources"].as_array().unwrap().len(), 6);
    assert_eq!(body["fact_check_links"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn full_analysis_endpoint() {
    let (status, body) = post_json(
        app(),
        "/api/v1/analyze",
        json!({ "text": "Shocking secret about the vaccine", "sourceUrl": "not a url" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis_id"].as_str().unwrap().starts_with("analysis_anon_"));
    assert_eq!(body["trusted_sources"]["source_verification"]["domain"], "unknown");
    assert_eq!(
        body["trusted_sources"]["source_verification"]["status"],
        "unparseable"
    );
    assert!(!body["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn oversized_text_is_rejected() {
    let config = Config {
        max_text_chars: 10,
        ..Config::default()
    };
    let (status, body) = post_json(
        app_with(config),
        "/api/v1/analyze",
        json!({ "text": "this text is longer than ten characters" }),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("limit is 10"));
}

#[tokio::test]
async fn missing_text_field_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analyze")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"source_url": "https://www.bbc.com"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
