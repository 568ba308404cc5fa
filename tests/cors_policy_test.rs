mod common;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use tower::ServiceExt;

use common::{test_config, TestApp};

async fn preflight(app: &TestApp, origin: &str) -> Option<String> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/hr/department")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("build request");

    let response = app
        .router()
        .oneshot(request)
        .await
        .expect("route request");

    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|value| value.to_str().expect("header value").to_string())
}

#[tokio::test]
async fn listed_origin_is_allowed() {
    let mut cfg = test_config();
    cfg.cors_allowed_origins =
        Some("http://localhost:3005,https://portal.fabrik.example".to_string());
    let app = TestApp::with_config(cfg).await;

    assert_eq!(
        preflight(&app, "http://localhost:3005").await.as_deref(),
        Some("http://localhost:3005")
    );
    assert_eq!(
        preflight(&app, "https://portal.fabrik.example")
            .await
            .as_deref(),
        Some("https://portal.fabrik.example")
    );
}

#[tokio::test]
async fn near_miss_origins_are_refused() {
    let mut cfg = test_config();
    cfg.cors_allowed_origins = Some("http://localhost:3005".to_string());
    let app = TestApp::with_config(cfg).await;

    // exact matching only: neither a longer port nor a different scheme
    assert_eq!(preflight(&app, "http://localhost:30055").await, None);
    assert_eq!(preflight(&app, "https://localhost:3005").await, None);
    assert_eq!(preflight(&app, "http://evil.example").await, None);
}

#[tokio::test]
async fn unparsable_origin_is_skipped_without_breaking_the_rest() {
    let mut cfg = test_config();
    // "héllo" is not a valid header value; only the first entry survives
    cfg.cors_allowed_origins = Some("http://localhost:3005,http://héllo.example".to_string());
    let app = TestApp::with_config(cfg).await;

    assert_eq!(
        preflight(&app, "http://localhost:3005").await.as_deref(),
        Some("http://localhost:3005")
    );
    assert_eq!(preflight(&app, "http://hello.example").await, None);
}

#[tokio::test]
async fn empty_allow_list_refuses_every_origin() {
    let app = TestApp::new().await;
    assert_eq!(preflight(&app, "http://localhost:3005").await, None);
}
