use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::*;

async fn get_global(content: Arc<FakeContent>, slug: &str) -> axum::response::Response {
    let app = api_routes(test_app_state_with_content(content));
    let request = Request::builder()
        .uri(format!("/api/globals/{slug}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn known_global_is_wrapped_in_a_data_envelope() {
    let faq = json!({"items": [{"question": "Do I need my own racket?", "answer": "No"}]});
    let content = Arc::new(FakeContent::new().with_global("faq", faq.clone()));
    let response = get_global(content, "faq").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, json!({ "data": faq }));
}

#[tokio::test]
async fn location_bubble_slug_is_camel_case() {
    let content = Arc::new(
        FakeContent::new().with_global("locationBubble", json!({"venue": "Sports Hall 2"})),
    );
    let response = get_global(content, "locationBubble").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_slug_is_rejected_without_an_upstream_call() {
    let content = Arc::new(FakeContent::new().with_global("faq", json!({"items": []})));
    let response = get_global(content.clone(), "pricing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content.recorded().is_empty(), "no CMS request should be made");
}

#[tokio::test]
async fn slug_matching_is_case_sensitive() {
    let content = Arc::new(
        FakeContent::new().with_global("locationBubble", json!({"venue": "Sports Hall 2"})),
    );
    let response = get_global(content.clone(), "locationbubble").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content.recorded().is_empty());
}

#[tokio::test]
async fn upstream_failure_surfaces_as_bad_gateway() {
    let content = Arc::new(FakeContent::new().failing());
    let response = get_global(content, "navbar").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn missing_upstream_global_maps_to_not_found() {
    let content = Arc::new(FakeContent::new());
    let response = get_global(content, "onboarding").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
