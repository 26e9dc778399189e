//! Layered CRUD service over users and orders.
//!
//! The layering runs request handlers → entity services → repositories,
//! with each layer depending only on the one below it through a generic
//! capability set: repositories implement [`storage::Repository`], services
//! wrap exactly one repository behind an [`domain::EntityMapper`], and the
//! REST layer builds the same five routes for any service. Backends (an
//! in-memory collection or SQLite) are picked per entity at composition
//! time and are interchangeable above the storage layer.

pub mod config;
pub mod domain;
pub mod rest;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use config::AppConfig;
use domain::models::{Order, User};
use domain::service::{EntityService, OrderMapper, UserMapper};
use storage::memory::{seed_orders, seed_users, InMemoryRepository};
use storage::sqlite::{DbConnection, SqliteOrderRepository, SqliteUserRepository};
use storage::traits::Repository;

/// Wire repositories, services, and routes according to `config`.
///
/// Backend selection happens here, once per entity; nothing downstream can
/// swap a backend afterwards. The relational backends share a single pool,
/// created once and reused.
pub async fn app(config: &AppConfig) -> Result<Router> {
    let db = match config.database_url() {
        Some(url) => Some(DbConnection::new(url).await?),
        None => None,
    };

    let users: Arc<dyn Repository<User>> = match &db {
        Some(db) => Arc::new(SqliteUserRepository::new(db.clone())),
        None => Arc::new(InMemoryRepository::with_records(seed_users())),
    };
    let orders: Arc<dyn Repository<Order>> = match &db {
        Some(db) => Arc::new(SqliteOrderRepository::new(db.clone())),
        None => Arc::new(InMemoryRepository::with_records(seed_orders())),
    };

    Ok(api_router(users, orders))
}

/// Assemble the HTTP surface from already-chosen backends.
pub fn api_router(users: Arc<dyn Repository<User>>, orders: Arc<dyn Repository<Order>>) -> Router {
    let user_service = EntityService::new(users, UserMapper);
    let order_service = EntityService::new(orders, OrderMapper);

    // CORS setup to allow a browser frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/users", rest::crud_router(user_service))
        .nest("/api/orders", rest::crud_router(order_service))
        .layer(cors)
}
