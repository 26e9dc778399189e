use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::service::{EntityMapper, EntityService};
use crate::storage::traits::StorageError;

/// CRUD routes for one entity, all sharing a single service instance.
///
/// Every entity gets the same surface: list and create at the root; get,
/// full-replace and delete at `/:id`. The service travels as router state,
/// which keeps the handlers below generic over the entity type.
pub fn crud_router<M>(service: EntityService<M>) -> Router
where
    M: EntityMapper,
    M::Request: DeserializeOwned,
    M::Response: Serialize,
{
    Router::new()
        .route("/", get(get_all::<M>).post(create::<M>))
        .route(
            "/:id",
            get(get_by_id::<M>).put(update::<M>).delete(delete::<M>),
        )
        .with_state(service)
}

/// Map an operation failure to the transport.
///
/// Every failure collapses to a 500 carrying the rejection payload
/// verbatim; a missing id and an unreachable database are
/// indistinguishable at this level.
fn failure_response(error: &StorageError) -> Response {
    tracing::error!("Request failed: {error}");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error.to_failure())).into_response()
}

async fn get_all<M>(State(service): State<EntityService<M>>) -> Response
where
    M: EntityMapper,
    M::Response: Serialize,
{
    match service.get_all().await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => failure_response(&e),
    }
}

async fn get_by_id<M>(State(service): State<EntityService<M>>, Path(id): Path<i64>) -> Response
where
    M: EntityMapper,
    M::Response: Serialize,
{
    match service.get_by_id(id).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => failure_response(&e),
    }
}

async fn create<M>(
    State(service): State<EntityService<M>>,
    Json(request): Json<M::Request>,
) -> Response
where
    M: EntityMapper,
    M::Request: DeserializeOwned,
    M::Response: Serialize,
{
    match service.create(request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => failure_response(&e),
    }
}

async fn update<M>(
    State(service): State<EntityService<M>>,
    Path(id): Path<i64>,
    Json(request): Json<M::Request>,
) -> Response
where
    M: EntityMapper,
    M::Request: DeserializeOwned,
    M::Response: Serialize,
{
    match service.update(id, request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => failure_response(&e),
    }
}

async fn delete<M>(State(service): State<EntityService<M>>, Path(id): Path<i64>) -> Response
where
    M: EntityMapper,
    M::Response: Serialize,
{
    match service.delete(id).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => failure_response(&e),
    }
}
