//! End-to-end scenarios driven through the real router.
//!
//! Each test builds the full handler → service → repository stack, fires
//! requests at it with `tower::ServiceExt::oneshot`, and asserts on the
//! exact JSON bodies a client would see.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use orders_backend::api_router;
use orders_backend::domain::models::{Order, User};
use orders_backend::storage::memory::{seed_orders, seed_users, InMemoryRepository};
use orders_backend::storage::sqlite::{DbConnection, SqliteOrderRepository, SqliteUserRepository};
use orders_backend::storage::traits::Repository;

/// App over fresh in-memory backends with the default seed data.
fn memory_app() -> Router {
    let users: Arc<dyn Repository<User>> =
        Arc::new(InMemoryRepository::with_records(seed_users()));
    let orders: Arc<dyn Repository<Order>> =
        Arc::new(InMemoryRepository::with_records(seed_orders()));
    api_router(users, orders)
}

/// App over a unique empty SQLite database.
async fn sqlite_app() -> Router {
    let url = format!(
        "file:memdb_{}?mode=memory&cache=shared",
        uuid::Uuid::new_v4()
    );
    let db = DbConnection::new(&url).await.expect("test database");
    let users: Arc<dyn Repository<User>> = Arc::new(SqliteUserRepository::new(db.clone()));
    let orders: Arc<dyn Repository<Order>> = Arc::new(SqliteOrderRepository::new(db));
    api_router(users, orders)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn listing_users_returns_the_seeded_records() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                {"id": 1, "name": "John Doe"},
                {"id": 2, "name": "Jane Doe"},
            ],
            "success": true,
        })
    );
}

#[tokio::test]
async fn fetching_a_missing_user_collapses_to_500() {
    let app = memory_app();

    let (status, body) = send(&app, Method::GET, "/api/users/99", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "message": "User not found"}));
}

#[tokio::test]
async fn created_user_is_echoed_and_readable() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"id": 3, "name": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": 3, "name": "Alice"}, "success": true})
    );

    let (status, body) = send(&app, Method::GET, "/api/users/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": 3, "name": "Alice"}, "success": true})
    );
}

#[tokio::test]
async fn updating_a_user_is_reflected_by_a_subsequent_get() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/users/1",
        Some(json!({"id": 1, "name": "Johnny"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": 1, "name": "Johnny"}, "success": true})
    );

    let (status, body) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Johnny");

    // Cardinality is unchanged by a full replace.
    let (_, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn deleting_an_order_returns_its_last_known_value() {
    let app = memory_app();

    let (status, body) = send(&app, Method::DELETE, "/api/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {"id": 1, "user": {"id": 1, "name": "John Doe"}},
            "success": true,
        })
    );

    let (status, body) = send(&app, Method::GET, "/api/orders/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "message": "Order not found"}));
}

#[tokio::test]
async fn relational_order_reads_join_the_user_name() {
    let app = sqlite_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"id": 1, "name": "John Doe"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The create response only echoes the placeholder user.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({"id": 5, "userId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": 5, "user": {"id": 1, "name": ""}}, "success": true})
    );

    // A direct read joins the real name back in.
    let (status, body) = send(&app, Method::GET, "/api/orders/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {"id": 5, "user": {"id": 1, "name": "John Doe"}},
            "success": true,
        })
    );
}

#[tokio::test]
async fn referential_integrity_diverges_between_backends() {
    // In memory: no user-existence check, the order is accepted.
    let memory = memory_app();
    let (status, _) = send(
        &memory,
        Method::POST,
        "/api/orders",
        Some(json!({"id": 9, "userId": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // SQLite: the foreign key rejects the same request.
    let sqlite = sqlite_app().await;
    let (status, body) = send(
        &sqlite,
        Method::POST,
        "/api/orders",
        Some(json!({"id": 9, "userId": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn order_created_in_memory_reads_back_with_an_empty_user_name() {
    let app = memory_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({"id": 5, "userId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // No join happens in memory, so the placeholder name survives the
    // read path.
    let (_, body) = send(&app, Method::GET, "/api/orders/5", None).await;
    assert_eq!(body["data"]["user"], json!({"id": 1, "name": ""}));
}
