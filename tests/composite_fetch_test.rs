mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{test_config, TestApp};

/// App whose internal sub-requests are served by a wiremock stand-in.
async fn app_with_internal(server: &MockServer) -> TestApp {
    let mut cfg = test_config();
    cfg.internal_base_url = Some(server.uri());
    TestApp::with_config(cfg).await
}

#[tokio::test]
async fn details_merges_parent_with_children() {
    let server = MockServer::start().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/hr/configuration/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "configuration"},
            "data": {"uuid": uuid, "leave_policy_name": "Standard", "remarks": null}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/hr/configuration-entry/by/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "configuration entry list"},
            "data": [
                {"uuid": Uuid::new_v4(), "maximum_number_of_allowed_leaves": 12},
                {"uuid": Uuid::new_v4(), "maximum_number_of_allowed_leaves": 4}
            ]
        })))
        .mount(&server)
        .await;

    let app = app_with_internal(&server).await;
    let body = app
        .request_json(
            Method::GET,
            &format!("/hr/configuration/details/{uuid}"),
            None,
            StatusCode::OK,
        )
        .await;

    assert_eq!(body["toast"]["type"], "select");
    assert_eq!(body["data"]["uuid"], uuid.to_string().as_str());
    assert_eq!(body["data"]["leave_policy_name"], "Standard");
    assert_eq!(
        body["data"]["configuration_entry"]
            .as_array()
            .expect("entries")
            .len(),
        2
    );
}

#[tokio::test]
async fn details_defaults_null_children_to_empty_array() {
    let server = MockServer::start().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/work/info/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "work info"},
            "data": {"uuid": uuid, "is_product_received": true}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/work/order/by/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "work order list"},
            "data": null
        })))
        .mount(&server)
        .await;

    let app = app_with_internal(&server).await;
    let body = app
        .request_json(
            Method::GET,
            &format!("/work/info/details/{uuid}"),
            None,
            StatusCode::OK,
        )
        .await;

    assert_eq!(body["data"]["order_entry"], json!([]));
}

#[tokio::test]
async fn failing_child_fetch_fails_the_whole_read() {
    let server = MockServer::start().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/store/purchase-return/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "purchase return"},
            "data": {"uuid": uuid}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/store/purchase-return-entry/by/{uuid}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = app_with_internal(&server).await;
    let error = app
        .request_json(
            Method::GET,
            &format!("/store/purchase-return/details/{uuid}"),
            None,
            StatusCode::BAD_GATEWAY,
        )
        .await;

    assert_eq!(error["error"], "Bad Gateway");
    // no partial parent payload leaks out
    assert!(error.get("data").is_none());
}

#[tokio::test]
async fn missing_parent_answers_not_found() {
    let server = MockServer::start().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/hr/configuration/{uuid}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Not Found",
            "message": format!("leave configuration {uuid} not found"),
            "timestamp": "2026-01-12T10:30:00Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/hr/configuration-entry/by/{uuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toast": {"status": 200, "type": "select", "message": "configuration entry list"},
            "data": []
        })))
        .mount(&server)
        .await;

    let app = app_with_internal(&server).await;
    app.request_json(
        Method::GET,
        &format!("/hr/configuration/details/{uuid}"),
        None,
        StatusCode::NOT_FOUND,
    )
    .await;
}
