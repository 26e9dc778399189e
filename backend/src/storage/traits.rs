//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! data-access backends to be used interchangeably by the service layer.

use async_trait::async_trait;
use shared::{Envelope, Failure};
use thiserror::Error;

/// Access to an entity's identity, plus the display name backends use in
/// not-found messages.
pub trait Identified {
    /// Entity name as it appears in messages such as `"User not found"`.
    const NAME: &'static str;

    fn id(&self) -> i64;
}

/// Failure modes a backend can surface.
///
/// There are exactly two: the requested id is absent, or the underlying
/// store failed. Store failures propagate unchanged; no layer above
/// classifies or retries them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Backend(#[from] sqlx::Error),
}

impl StorageError {
    /// The wire-level rejection carried back to the caller verbatim.
    pub fn to_failure(&self) -> Failure {
        Failure::new(self.to_string())
    }
}

pub type StorageResult<T> = Result<Envelope<T>, StorageError>;

/// Capability set every data-access backend implements for an entity type.
///
/// Implementations must be behaviorally interchangeable from the service
/// layer's point of view: same envelope on success, same error taxonomy on
/// failure. Backends differ only in ordering guarantees (insertion order
/// in memory, ascending id in SQL) and in durability.
///
/// Repositories are only concerned with persistence and retrieval. No
/// uniqueness check happens here on create: the in-memory backend will
/// silently hold two records with the same id, while the relational
/// backend surfaces the primary-key violation as a backend error.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// All entities, in backend-defined order.
    async fn get_all(&self) -> StorageResult<Vec<T>>;

    /// The entity whose id matches, or `NotFound`.
    async fn get_by_id(&self, id: i64) -> StorageResult<T>;

    /// Persist a new entity and echo it back.
    async fn create(&self, entity: T) -> StorageResult<T>;

    /// Full replace of the record matching `id`, or `NotFound`.
    async fn update(&self, id: i64, entity: T) -> StorageResult<T>;

    /// Remove the record matching `id` and return its pre-deletion value,
    /// or `NotFound`.
    async fn delete(&self, id: i64) -> StorageResult<T>;
}
