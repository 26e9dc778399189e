use std::sync::Arc;

use shared::{CreateOrderRequest, Envelope, OrderResponse};
use tracing::info;

use crate::domain::models::{Order, User};
use crate::storage::traits::{Identified, Repository, StorageError};

/// Mapping between an entity's wire DTOs and its domain model.
///
/// A mapper is composed into an [`EntityService`] at construction time;
/// requiring both directions on one trait keeps the write and read halves
/// of the wire contract next to each other.
pub trait EntityMapper: Clone + Send + Sync + 'static {
    type Request: Send + 'static;
    type Response: Send + 'static;
    type Entity: Identified + Send + Sync + 'static;

    fn to_entity(&self, request: Self::Request) -> Self::Entity;
    fn to_response(&self, entity: Self::Entity) -> Self::Response;
}

/// Business-logic layer for one entity type.
///
/// Holds exactly one data-access backend, chosen at composition time and
/// never swapped afterwards. Every operation forwards to the backend and
/// re-wraps its envelope with the mapped response shape; a failed backend
/// call propagates to the caller instead of being swallowed.
pub struct EntityService<M: EntityMapper> {
    repository: Arc<dyn Repository<M::Entity>>,
    mapper: M,
}

impl<M: EntityMapper> Clone for EntityService<M> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mapper: self.mapper.clone(),
        }
    }
}

impl<M: EntityMapper> EntityService<M> {
    pub fn new(repository: Arc<dyn Repository<M::Entity>>, mapper: M) -> Self {
        Self { repository, mapper }
    }

    pub async fn get_all(&self) -> Result<Envelope<Vec<M::Response>>, StorageError> {
        info!("Listing all {} records", M::Entity::NAME);

        let result = self.repository.get_all().await?;
        Ok(Envelope {
            data: result
                .data
                .into_iter()
                .map(|entity| self.mapper.to_response(entity))
                .collect(),
            success: result.success,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Envelope<M::Response>, StorageError> {
        info!("Fetching {} {}", M::Entity::NAME, id);

        let result = self.repository.get_by_id(id).await?;
        Ok(Envelope {
            data: self.mapper.to_response(result.data),
            success: result.success,
        })
    }

    pub async fn create(&self, request: M::Request) -> Result<Envelope<M::Response>, StorageError> {
        info!("Creating {}", M::Entity::NAME);

        let entity = self.mapper.to_entity(request);
        let result = self.repository.create(entity).await?;
        Ok(Envelope {
            data: self.mapper.to_response(result.data),
            success: result.success,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        request: M::Request,
    ) -> Result<Envelope<M::Response>, StorageError> {
        info!("Updating {} {}", M::Entity::NAME, id);

        let entity = self.mapper.to_entity(request);
        let result = self.repository.update(id, entity).await?;
        Ok(Envelope {
            data: self.mapper.to_response(result.data),
            success: result.success,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<Envelope<M::Response>, StorageError> {
        info!("Deleting {} {}", M::Entity::NAME, id);

        let result = self.repository.delete(id).await?;
        Ok(Envelope {
            data: self.mapper.to_response(result.data),
            success: result.success,
        })
    }
}

/// Identity mapping for users: the wire shape equals the domain shape.
#[derive(Clone, Copy, Default)]
pub struct UserMapper;

impl EntityMapper for UserMapper {
    type Request = shared::User;
    type Response = shared::User;
    type Entity = User;

    fn to_entity(&self, request: shared::User) -> User {
        User {
            id: request.id,
            name: request.name,
        }
    }

    fn to_response(&self, entity: User) -> shared::User {
        shared::User {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Order wire mapping.
///
/// Writes carry only the user id, so `to_entity` synthesizes a placeholder
/// user with an empty name; the relational read path joins the real name
/// back in. An order created against the in-memory backend therefore reads
/// back with an empty user name until the user record itself is embedded.
#[derive(Clone, Copy, Default)]
pub struct OrderMapper;

impl EntityMapper for OrderMapper {
    type Request = CreateOrderRequest;
    type Response = OrderResponse;
    type Entity = Order;

    fn to_entity(&self, request: CreateOrderRequest) -> Order {
        Order {
            id: request.id,
            user: User {
                id: request.user_id,
                name: String::new(),
            },
        }
    }

    fn to_response(&self, entity: Order) -> OrderResponse {
        OrderResponse {
            id: entity.id,
            user: shared::User {
                id: entity.user.id,
                name: entity.user.name,
            },
        }
    }
}
