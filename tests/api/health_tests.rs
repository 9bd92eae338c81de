//! Health Endpoint Tests

use axum::http::StatusCode;

use crate::common::{read_json, TestApp};

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn liveness_probe_responds() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_probe_reports_repository_status() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["checks"]["repository"]["status"], "healthy");
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let app = TestApp::new();

    // Generate at least one request before scraping.
    app.get("/health").await;
    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
}
