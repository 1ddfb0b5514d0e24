//! HTTP interface tests, driving the router in process.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use envelope::server::{router, AppState};
use envelope::services::TransferMode;
use envelope::storage::{initialize_storage, EnvelopeRepository};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(mode: TransferMode) -> (Router, Arc<EnvelopeRepository>) {
    let storage = Arc::new(initialize_storage(true).unwrap());
    let app = router(AppState::new(storage.clone(), mode));
    (app, storage)
}

fn app() -> (Router, Arc<EnvelopeRepository>) {
    app_with(TransferMode::Reference)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {} returned {}", uri, body);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_list_seeded_envelopes() {
    let (app, _) = app();
    let body = get_json(&app, "/user1/envelopes").await;
    assert_eq!(
        body,
        json!({
            "clothes": {"budget": 100.0, "spending": 0.0},
            "food": {"budget": 200.0, "spending": 0.0}
        })
    );
}

#[tokio::test]
async fn test_unknown_user_and_category() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/nobody/envelopes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("nobody"));

    let (status, _) = send(&app, Method::GET, "/nobody/envelopes/food", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/user1/envelopes/rent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("rent"));
}

#[tokio::test]
async fn test_create_then_get() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/user2/envelopes/rent",
        Some(json!({"budget": 950.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let rent = get_json(&app, "/user2/envelopes/rent").await;
    assert_eq!(rent, json!({"budget": 950.5, "spending": 0.0}));
}

#[tokio::test]
async fn test_create_rejects_bad_budget() {
    let (app, storage) = app();

    for body in [json!({"budget": -5}), json!({"budget": "100"}), json!({})] {
        let (status, _) = send(&app, Method::POST, "/user2/envelopes/rent", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = send(&app, Method::POST, "/user2/envelopes/rent", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(!storage.contains_user("user2").unwrap());
    let (status, _) = send(&app, Method::GET, "/user2/envelopes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body() {
    let (app, _) = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/user1/envelopes/food")
        .body(Body::from("{budget: 1"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_spending() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/food",
        Some(json!({"spending": 250})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/food",
        Some(json!({"budget": 300, "spending": 250})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let food = get_json(&app, "/user1/envelopes/food").await;
    assert_eq!(food, json!({"budget": 300.0, "spending": 250.0}));
}

#[tokio::test]
async fn test_update_budget_below_spending() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/food",
        Some(json!({"spending": 150})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/food",
        Some(json!({"budget": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let food = get_json(&app, "/user1/envelopes/food").await;
    assert_eq!(food, json!({"budget": 200.0, "spending": 150.0}));
}

#[tokio::test]
async fn test_transfer_path_only_accepts_post() {
    let (app, storage) = app();
    let before = storage.snapshot().unwrap();

    for method in [Method::GET, Method::PATCH, Method::DELETE] {
        let (status, _) = send(
            &app,
            method.clone(),
            "/user1/envelopes/transfer",
            Some(json!({"budget": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
    }

    assert_eq!(storage.snapshot().unwrap(), before);
}

#[tokio::test]
async fn test_update_ignores_wrong_types() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/food",
        Some(json!({"budget": "lots", "spending": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let food = get_json(&app, "/user1/envelopes/food").await;
    assert_eq!(food, json!({"budget": 200.0, "spending": 0.0}));
}

#[tokio::test]
async fn test_update_missing_targets() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/nobody/envelopes/food",
        Some(json!({"budget": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user1/envelopes/rent",
        Some(json!({"budget": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get() {
    let (app, _) = app();

    let (status, _) = send(&app, Method::DELETE, "/user1/envelopes/food", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/user1/envelopes/food", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/user1/envelopes/food", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let remaining = get_json(&app, "/user1/envelopes").await;
    assert_eq!(remaining, json!({"clothes": {"budget": 100.0, "spending": 0.0}}));
}

#[tokio::test]
async fn test_reference_transfer() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/user1/envelopes/transfer",
        Some(json!({"category_from": "food", "category_to": "clothes", "transfer_amt": 50})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let envelopes = get_json(&app, "/user1/envelopes").await;
    assert_eq!(envelopes["clothes"]["budget"], json!(50.0));
    assert_eq!(envelopes["food"]["budget"], json!(250.0));
}

#[tokio::test]
async fn test_corrected_transfer() {
    let (app, _) = app_with(TransferMode::Corrected);

    let (status, _) = send(
        &app,
        Method::POST,
        "/user1/envelopes/transfer",
        Some(json!({"category_from": "food", "category_to": "clothes", "transfer_amt": 50})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let envelopes = get_json(&app, "/user1/envelopes").await;
    assert_eq!(envelopes["clothes"]["budget"], json!(150.0));
    assert_eq!(envelopes["food"]["budget"], json!(150.0));
}

#[tokio::test]
async fn test_transfer_failures() {
    let (app, storage) = app();
    let before = storage.snapshot().unwrap();

    let cases = [
        (
            "/nobody/envelopes/transfer",
            json!({"category_from": "food", "category_to": "clothes", "transfer_amt": 5}),
            StatusCode::NOT_FOUND,
        ),
        (
            "/user1/envelopes/transfer",
            json!({"category_from": "food", "category_to": "food", "transfer_amt": 5}),
            StatusCode::BAD_REQUEST,
        ),
        (
            "/user1/envelopes/transfer",
            json!({"category_from": 1, "category_to": "clothes", "transfer_amt": 5}),
            StatusCode::BAD_REQUEST,
        ),
        (
            "/user1/envelopes/transfer",
            json!({"category_from": "food", "category_to": "clothes", "transfer_amt": "5"}),
            StatusCode::BAD_REQUEST,
        ),
        (
            "/user1/envelopes/transfer",
            json!({"category_from": "food", "category_to": "clothes", "transfer_amt": 201}),
            StatusCode::BAD_REQUEST,
        ),
        (
            "/user1/envelopes/transfer",
            json!({"category_from": "rent", "category_to": "clothes", "transfer_amt": 5}),
            StatusCode::NOT_FOUND,
        ),
    ];

    for (uri, body, expected) in cases {
        let (status, text) = send(&app, Method::POST, uri, Some(body.clone())).await;
        assert_eq!(status, expected, "{} {} -> {}", uri, body, text);
    }

    assert_eq!(storage.snapshot().unwrap(), before);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let (app, _) = app();
    let request = Request::builder()
        .uri("/user1/envelopes")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_concurrent_transfers_are_atomic() {
    let (app, storage) = app_with(TransferMode::Corrected);

    let mut handles = Vec::new();
    for i in 0..20 {
        let app = app.clone();
        let (from, to) = if i % 2 == 0 { ("food", "clothes") } else { ("clothes", "food") };
        handles.push(tokio::spawn(async move {
            send(
                &app,
                Method::POST,
                "/user1/envelopes/transfer",
                Some(json!({"category_from": from, "category_to": to, "transfer_amt": 10})),
            )
            .await
        }));
    }
    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let snapshot = storage.snapshot().unwrap();
    let total: f64 = snapshot["user1"].values().map(|e| e.budget).sum();
    assert_eq!(total, 300.0);
}
