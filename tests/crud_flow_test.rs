mod common;

use axum::http::{Method, StatusCode};
use chrono::{Datelike, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestApp;

#[tokio::test]
async fn insert_then_fetch_round_trips() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/hr/department",
            Some(json!({"department": "Electronics"})),
            StatusCode::CREATED,
        )
        .await;

    assert_eq!(created["toast"]["status"], 201);
    assert_eq!(created["toast"]["type"], "insert");
    let uuid = created["data"][0]["uuid"].as_str().expect("uuid").to_string();
    assert_eq!(
        created["toast"]["message"],
        format!("{uuid} inserted").as_str()
    );

    let fetched = app
        .request_json(
            Method::GET,
            &format!("/hr/department/{uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(fetched["data"]["department"], "Electronics");
    assert_eq!(fetched["data"]["uuid"], uuid.as_str());
    // display id starts at 1 per table
    assert_eq!(fetched["data"]["id"], 1);
}

#[tokio::test]
async fn client_supplied_uuid_is_honored() {
    let app = TestApp::new().await;
    let uuid = Uuid::new_v4();

    let created = app
        .request_json(
            Method::POST,
            "/hr/department",
            Some(json!({"uuid": uuid, "department": "Repairs"})),
            StatusCode::CREATED,
        )
        .await;
    assert_eq!(created["data"][0]["uuid"], uuid.to_string().as_str());
}

#[tokio::test]
async fn duplicate_uuid_answers_conflict() {
    let app = TestApp::new().await;
    let uuid = Uuid::new_v4();

    app.request_json(
        Method::POST,
        "/hr/department",
        Some(json!({"uuid": uuid, "department": "First"})),
        StatusCode::CREATED,
    )
    .await;

    let conflict = app
        .request_json(
            Method::POST,
            "/hr/department",
            Some(json!({"uuid": uuid, "department": "Second"})),
            StatusCode::CONFLICT,
        )
        .await;
    assert_eq!(conflict["error"], "Conflict");
}

#[tokio::test]
async fn validation_failure_answers_bad_request() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/hr/department",
        Some(json!({"department": ""})),
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/hr/designation",
            Some(json!({"designation": "Technician"})),
            StatusCode::CREATED,
        )
        .await;
    let uuid = created["data"][0]["uuid"].as_str().expect("uuid").to_string();
    let created_at = created["data"][0]["created_at"].clone();
    assert!(created["data"][0]["updated_at"].is_null());

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/hr/designation/{uuid}"),
            Some(json!({"designation": "Senior Technician"})),
            StatusCode::OK,
        )
        .await;

    assert_eq!(updated["toast"]["type"], "update");
    assert_eq!(updated["data"][0]["designation"], "Senior Technician");
    assert_eq!(updated["data"][0]["created_at"], created_at);
    assert!(!updated["data"][0]["updated_at"].is_null());
}

#[tokio::test]
async fn operations_on_missing_rows_answer_not_found() {
    let app = TestApp::new().await;
    let ghost = Uuid::new_v4();

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({"department": "x"}))),
        (Method::DELETE, None),
    ] {
        let error = app
            .request_json(
                method,
                &format!("/hr/department/{ghost}"),
                body,
                StatusCode::NOT_FOUND,
            )
            .await;
        assert_eq!(error["error"], "Not Found");
    }
}

#[tokio::test]
async fn delete_returns_the_removed_row() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/store/warehouse",
            Some(json!({"name": "Main"})),
            StatusCode::CREATED,
        )
        .await;
    let uuid = created["data"][0]["uuid"].as_str().expect("uuid").to_string();

    let deleted = app
        .request_json(
            Method::DELETE,
            &format!("/store/warehouse/{uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(deleted["toast"]["type"], "delete");
    assert_eq!(deleted["data"][0]["name"], "Main");

    app.request_json(
        Method::GET,
        &format!("/store/warehouse/{uuid}"),
        None,
        StatusCode::NOT_FOUND,
    )
    .await;

    // deleting the same row again is a 404, not a silent success
    app.request_json(
        Method::DELETE,
        &format!("/store/warehouse/{uuid}"),
        None,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[tokio::test]
async fn empty_listing_yields_empty_array() {
    let app = TestApp::new().await;

    let listed = app
        .request_json(Method::GET, "/work/problem", None, StatusCode::OK)
        .await;
    assert_eq!(listed["toast"]["status"], 200);
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn listing_orders_newest_first() {
    let app = TestApp::new().await;

    // spaced inserts so created_at strictly increases
    for name in ["Alpha", "Beta", "Gamma"] {
        app.request_json(
            Method::POST,
            "/hr/leave-category",
            Some(json!({"name": name})),
            StatusCode::CREATED,
        )
        .await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let listed = app
        .request_json(Method::GET, "/hr/leave-category", None, StatusCode::OK)
        .await;
    let rows = listed["data"].as_array().expect("array");

    let names: Vec<&str> = rows
        .iter()
        .map(|row| row["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);

    let ids: Vec<i64> = rows.iter().map(|row| row["id"].as_i64().expect("id")).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn joined_name_columns_resolve_and_dangle_to_null() {
    let app = TestApp::new().await;

    let department = app
        .request_json(
            Method::POST,
            "/hr/department",
            Some(json!({"department": "Service"})),
            StatusCode::CREATED,
        )
        .await;
    let department_uuid = department["data"][0]["uuid"].as_str().expect("uuid");

    let employee = app
        .request_json(
            Method::POST,
            "/hr/employee",
            Some(json!({
                "name": "Kamal",
                "email": "kamal@fabrik.example",
                "department_uuid": department_uuid
            })),
            StatusCode::CREATED,
        )
        .await;
    let employee_uuid = employee["data"][0]["uuid"].as_str().expect("uuid");

    let fetched = app
        .request_json(
            Method::GET,
            &format!("/hr/employee/{employee_uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(fetched["data"]["department_name"], "Service");
    // no designation assigned; the joined name dangles to null
    assert!(fetched["data"]["designation_name"].is_null());
}

#[tokio::test]
async fn work_info_carries_display_code() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/work/info",
            Some(json!({"received_date": Utc::now()})),
            StatusCode::CREATED,
        )
        .await;
    let uuid = created["data"][0]["uuid"].as_str().expect("uuid").to_string();

    let fetched = app
        .request_json(
            Method::GET,
            &format!("/work/info/{uuid}"),
            None,
            StatusCode::OK,
        )
        .await;

    let expected = format!("WI{:02}-0001", Utc::now().year() % 100);
    assert_eq!(fetched["data"]["info_id"], expected.as_str());
}

#[tokio::test]
async fn work_orders_list_by_owning_info() {
    let app = TestApp::new().await;
    let info_uuid = Uuid::new_v4();
    let other_info = Uuid::new_v4();

    for (owner, statement) in [
        (info_uuid, "no power"),
        (info_uuid, "cracked screen"),
        (other_info, "unrelated"),
    ] {
        app.request_json(
            Method::POST,
            "/work/order",
            Some(json!({"info_uuid": owner, "problem_statement": statement})),
            StatusCode::CREATED,
        )
        .await;
    }

    let listed = app
        .request_json(
            Method::GET,
            &format!("/work/order/by/{info_uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    let rows = listed["data"].as_array().expect("array");
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["info_uuid"], info_uuid.to_string().as_str());
        let code = row["order_id"].as_str().expect("order_id");
        assert!(code.starts_with("WO"), "display code was {code}");
    }

    // unknown parent: empty listing, not an error
    let empty = app
        .request_json(
            Method::GET,
            &format!("/work/order/by/{}", Uuid::new_v4()),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(empty["data"], json!([]));
}

#[tokio::test]
async fn purchase_return_embeds_entries_and_defaults_to_empty() {
    let app = TestApp::new().await;

    let header = app
        .request_json(
            Method::POST,
            "/store/purchase-return",
            Some(json!({"purchase_uuid": Uuid::new_v4()})),
            StatusCode::CREATED,
        )
        .await;
    let return_uuid = header["data"][0]["uuid"].as_str().expect("uuid").to_string();

    // no entries yet: the child array is [], never null
    let fetched = app
        .request_json(
            Method::GET,
            &format!("/store/purchase-return/{return_uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(fetched["data"]["purchase_return_entry"], json!([]));
    let code = fetched["data"]["purchase_return_id"].as_str().expect("code");
    assert!(code.starts_with("SPR"), "display code was {code}");

    for product in ["charger", "battery"] {
        app.request_json(
            Method::POST,
            "/store/purchase-return-entry",
            Some(json!({
                "purchase_return_uuid": return_uuid,
                "product_name": product,
                "quantity": 2
            })),
            StatusCode::CREATED,
        )
        .await;
    }

    let fetched = app
        .request_json(
            Method::GET,
            &format!("/store/purchase-return/{return_uuid}"),
            None,
            StatusCode::OK,
        )
        .await;
    let entries = fetched["data"]["purchase_return_entry"]
        .as_array()
        .expect("entries");
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn health_probe_reports_database_reachable() {
    let app = TestApp::new().await;

    let body: Value = app
        .request_json(Method::GET, "/health", None, StatusCode::OK)
        .await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "reachable");
}
