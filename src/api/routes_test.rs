//! Router integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{ViewResponse, create_router};
use crate::view::render_document;

async fn get(uri: &str) -> axum::response::Response {
    create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

// =============================================================================
// GET / - Landing page
// =============================================================================

#[tokio::test]
async fn root_serves_rendered_document() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(response).await;
    assert_eq!(body, render_document());
    assert!(body.contains("🏎️ Welcome to the Formula 1 Fan Hub"));
    assert!(body.contains("Speed. Strategy. Adrenaline."));
    assert!(body.contains(r#"href="https://www.formula1.com""#));
    assert!(body.contains(r#"rel="noopener noreferrer""#));
}

#[tokio::test]
async fn root_is_identical_across_requests() {
    let first = body_string(get("/").await).await;
    let second = body_string(get("/").await).await;
    assert_eq!(first, second);
}

// =============================================================================
// GET /api/view - Content description
// =============================================================================

#[tokio::test]
async fn view_description_matches_banner() {
    let response = get("/api/view").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["title"], "🏎️ Welcome to the Formula 1 Fan Hub");
    assert_eq!(body["subtitle"], "Speed. Strategy. Adrenaline.");
    assert_eq!(body["link"]["text"], "Visit Official F1 Website");
    assert_eq!(body["link"]["href"], "https://www.formula1.com");
    assert_eq!(body["link"]["target"], "_blank");
    assert_eq!(body["link"]["rel"], "noopener noreferrer");
}

#[tokio::test]
async fn view_description_is_welcome_content() {
    let response = get("/api/view").await;
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let expected = serde_json::to_value(ViewResponse::welcome()).unwrap();
    assert_eq!(body, expected);
}

// =============================================================================
// System routes
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn deployment_health_gate_returns_ok_with_greeting() {
    let response = get("/api/message").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["message"], "🏎️ Welcome to the Formula 1 Fan Hub");
}

#[tokio::test]
async fn docs_are_served() {
    let response = get("/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get("/notes").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_to_root_is_rejected() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
