//! Router-level API tests over the in-memory ledger

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use mini_ledger::MemoryLedger;
use mini_ledger::gateway::{AppState, build_router};

fn app() -> Router {
    build_router(Arc::new(AppState::new(Arc::new(MemoryLedger::new()))))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn open(app: &Router, name: &str, balance: Value) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/account",
        json!({"name": name, "balance": balance}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["account_no"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["backend"], "memory");
    assert!(body["data"]["timestamp_ms"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_and_read_accounts() {
    let app = app();
    assert_eq!(open(&app, "alice", json!("100.00")).await, 1);
    assert_eq!(open(&app, "bob", json!(50)).await, 2);

    let (status, body) = get(&app, "/api/v1/accounts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"account_no": 1, "name": "alice"},
            {"account_no": 2, "name": "bob"},
        ])
    );

    let (_, body) = get(&app, "/api/v1/account-numbers").await;
    assert_eq!(body["data"], json!([1, 2]));

    let (status, body) = get(&app, "/api/v1/account/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "alice");
    assert_eq!(body["data"]["balance"], "100.00");
}

#[tokio::test]
async fn test_account_lookup_errors() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/account/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4004);

    let (status, body) = get(&app, "/api/v1/account/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_create_account_validation() {
    let app = app();

    let (status, body) = post(&app, "/api/v1/account", json!({"name": " ", "balance": "1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, _) = post(&app, "/api/v1/account", json!({"name": "x", "balance": "-1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/api/v1/account", json!({"name": "x", "balance": ".5"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/api/v1/account", json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/api/v1/accounts").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_transfer_flow() {
    let app = app();
    let a = open(&app, "A", json!("100")).await;
    let b = open(&app, "B", json!("50")).await;

    let (status, body) = post(
        &app,
        "/api/v1/transfer",
        json!({"creditAccountNo": a, "debitAccountNo": b, "amount": "30"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let id = body["data"]["transactionId"].as_str().unwrap().to_string();

    let (_, body) = get(&app, &format!("/api/v1/account/{}", a)).await;
    assert_eq!(body["data"]["balance"], "70");
    let (_, body) = get(&app, &format!("/api/v1/account/{}", b)).await;
    assert_eq!(body["data"]["balance"], "80");

    let (status, body) = get(&app, &format!("/api/v1/transaction/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["amount"], "30");
    assert_eq!(body["data"]["credit_account"], a);
    assert_eq!(body["data"]["debit_account"], b);

    let (_, body) = get(&app, "/api/v1/transactions").await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["amount"], "30");
    assert!(list[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_transfer_error_statuses() {
    let app = app();
    let a = open(&app, "A", json!("10")).await;
    let b = open(&app, "B", json!("0")).await;

    let cases = [
        (json!({"creditAccountNo": a, "debitAccountNo": b, "amount": "50"}), StatusCode::UNPROCESSABLE_ENTITY, 1002),
        (json!({"creditAccountNo": a, "debitAccountNo": 99, "amount": "1"}), StatusCode::NOT_FOUND, 4004),
        (json!({"creditAccountNo": a, "debitAccountNo": a, "amount": "1"}), StatusCode::BAD_REQUEST, 1001),
        (json!({"creditAccountNo": a, "debitAccountNo": b, "amount": "0"}), StatusCode::BAD_REQUEST, 1001),
        (json!({"creditAccountNo": a, "debitAccountNo": b, "amount": "-1"}), StatusCode::BAD_REQUEST, 1001),
        (json!({"creditAccountNo": a, "debitAccountNo": b}), StatusCode::BAD_REQUEST, 1001),
    ];
    for (req, expected_status, expected_code) in cases {
        let (status, body) = post(&app, "/api/v1/transfer", req.clone()).await;
        assert_eq!(status, expected_status, "{} -> {}", req, body);
        assert_eq!(body["code"], expected_code, "{}", req);
        assert!(body.get("data").is_none());
    }

    // Nothing moved, nothing recorded
    let (_, body) = get(&app, &format!("/api/v1/account/{}", a)).await;
    assert_eq!(body["data"]["balance"], "10");
    let (_, body) = get(&app, "/api/v1/transactions").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_transaction_lookup_errors() {
    let app = app();

    let (status, body) = get(&app, "/api/v1/transaction/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, body) = get(
        &app,
        "/api/v1/transaction/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4005);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let (status, body) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Mini Ledger API");
    assert!(body["paths"]["/api/v1/transfer"].is_object());
}
