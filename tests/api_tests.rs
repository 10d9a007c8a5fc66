mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::TestStorage;
use parking_management::build_app;
use parking_management::config::environment::EnvironmentConfig;
use parking_management::state::AppState;

const PREFIX: &str = "/api/v1/parking-management";

fn create_test_app(storage: &TestStorage) -> Router {
    let state = AppState::with_clock(
        EnvironmentConfig::with_storage_path(storage.root.clone()),
        storage.store.clone(),
        Arc::new(storage.clock.clone()),
    );
    build_app(state)
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", PREFIX, path));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn seed(app: &Router) {
    let (status, _) = send(app, "POST", "/parking-lots", Some(json!({"name": "A-01", "floor": "1"}))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        app,
        "POST",
        "/vehicles",
        Some(json!({
            "name": "Car",
            "type": "car",
            "first_hour_price": 5000,
            "price_per_hour_percent": 50
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "parking-management");
}

#[tokio::test]
async fn test_parking_round_trip_over_http() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);
    seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/parking-in",
        Some(json!({"plate_number": "B-1", "type": "car", "color": "red"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["parking_lot"], "A-01");

    let (status, body) = send(&app, "GET", "/parking-data/count?type=car", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    storage.clock.advance(Duration::minutes(150));
    let (status, body) = send(&app, "POST", "/parking-out", Some(json!({"plate_number": "B-1"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fee"], 10000);
    assert_eq!(body["data"]["parked_hours"], 2);

    let (status, body) = send(&app, "GET", "/parking-data/plates?color=red", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plate_numbers"], json!(["B-1"]));
}

#[tokio::test]
async fn test_lifecycle_errors_map_to_status_codes() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);
    seed(&app).await;

    let (status, body) = send(&app, "POST", "/parking-out", Some(json!({"plate_number": "X-1"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "There's no vehicle parked with this plate number");

    let check_in = json!({"plate_number": "B-1", "type": "car", "color": "red"});
    send(&app, "POST", "/parking-in", Some(check_in.clone())).await;
    let (status, body) = send(&app, "POST", "/parking-in", Some(check_in)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, body) = send(
        &app,
        "POST",
        "/parking-in",
        Some(json!({"plate_number": "B-2", "type": "car", "color": "blue"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_CAPACITY");
}

#[tokio::test]
async fn test_invalid_check_in_is_validation_error() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);

    let (status, body) = send(
        &app,
        "POST",
        "/parking-in",
        Some(json!({"plate_number": "", "type": "car", "color": "red"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"].is_object());
}

#[tokio::test]
async fn test_storage_failure_hides_cause() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);
    seed(&app).await;
    std::fs::write(storage.table_file("parking_vehicle_status"), b"[{").unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/parking-in",
        Some(json!({"plate_number": "B-1", "type": "car", "color": "red"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORAGE_ERROR");
    assert_eq!(body["message"], "An error occurred while accessing storage");
}

#[tokio::test]
async fn test_parking_lot_endpoints() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);

    let (status, body) = send(&app, "POST", "/parking-lots", Some(json!({"name": "A-01", "floor": "1"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);

    let (status, body) = send(&app, "PUT", "/parking-lots/1", Some(json!({"name": "A-10", "floor": "2"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "A-10");

    let (status, body) = send(&app, "GET", "/parking-lots?search=a-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", "/parking-lots/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/parking-lots/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Data not found");

    let (_, body) = send(&app, "GET", "/parking-lots", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_vehicle_endpoints() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);
    seed(&app).await;

    let (status, body) = send(&app, "GET", "/vehicles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "car");
    assert_eq!(body["first_hour_price"], 5000);

    let (status, _) = send(
        &app,
        "PUT",
        "/vehicles/1",
        Some(json!({
            "name": "Car",
            "type": "car",
            "first_hour_price": 7000,
            "price_per_hour_percent": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/vehicles?search=CAR", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["first_hour_price"], 7000);

    let (status, _) = send(&app, "DELETE", "/vehicles/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_query_parameters_are_trimmed() {
    let storage = TestStorage::new();
    let app = create_test_app(&storage);
    seed(&app).await;

    send(
        &app,
        "POST",
        "/parking-in",
        Some(json!({"plate_number": "B-1", "type": "car", "color": "red"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/parking-data/plates?color=red%20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plate_numbers"], json!(["B-1"]));

    let (status, body) = send(&app, "GET", "/parking-data/count?type=%20car", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}
