use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::DateTime;
use pipesite::server::AppState;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

// Helper to create a throwaway static site
fn create_public_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><html><body class=\"landing\"></body></html>",
    )
    .unwrap();
    fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
    dir
}

fn create_test_app(public_dir: &Path, environment: &str) -> axum::Router {
    let state = Arc::new(AppState::new(environment));
    pipesite::routes::create_routes(public_dir).with_state(state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_is_a_liveness_check() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "development");

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["environment"], "development");

    let uptime = json["uptime"].as_f64().unwrap();
    assert!(uptime >= 0.0);

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_reports_configured_environment() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "production");

    let (_, body) = get(app, "/health").await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["environment"], "production");
}

#[tokio::test]
async fn test_project_info_payload_is_fixed() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "development");

    let (status, body) = get(app, "/api/project-info").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Jenkins CI/CD Pipeline Project");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["status"], "Production Ready");
    assert_eq!(json["uptime"], "99.9%");

    let technologies: Vec<&str> = json["technologies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        technologies,
        vec!["Jenkins", "Docker", "AWS", "Terraform", "Ansible", "Node.js"]
    );

    let last_deployment = json["lastDeployment"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(last_deployment).is_ok());
}

#[tokio::test]
async fn test_root_serves_the_landing_page() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "development");

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("landing"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "development");

    let (status, body) = get(app, "/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("margin"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let public = create_public_dir();
    let app = create_test_app(public.path(), "development");

    let (status, body) = get(app, "/no/such/page").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("landing"));
}

#[tokio::test]
async fn test_server_binds_the_configured_port() {
    let public = create_public_dir();
    let config = pipesite::Config {
        port: 0,
        environment: "test".to_string(),
        public_dir: public.path().to_path_buf(),
    };

    let handle = pipesite::run_server(&config).await.unwrap();
    // Port 0 asks the OS for a free port; the handle reports what was
    // actually bound, which is what the logs print.
    assert_ne!(handle.port(), 0);
    handle.shutdown();
}
