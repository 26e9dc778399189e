//! # In-Memory Storage
//!
//! Volatile backend holding entities in a plain `Vec` in insertion order.
//! Useful for demos and tests; everything is lost on restart.

use async_trait::async_trait;
use shared::Envelope;
use tokio::sync::Mutex;

use crate::domain::models::{Order, User};

use super::traits::{Identified, Repository, StorageError, StorageResult};

/// Generic in-memory repository over any identified entity type.
///
/// Lookups are linear scans. The mutex makes each operation atomic, but
/// read-modify-write sequences spanning several requests are not
/// coordinated; this backend assumes the cooperative one-request-at-a-time
/// model and is not meant for parallel mutation.
pub struct InMemoryRepository<T> {
    records: Mutex<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Start from a fixed record set, e.g. composition-time seed data.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    async fn get_all(&self) -> StorageResult<Vec<T>> {
        let records = self.records.lock().await;
        Ok(Envelope::ok(records.clone()))
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<T> {
        let records = self.records.lock().await;
        records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .map(Envelope::ok)
            .ok_or(StorageError::NotFound(T::NAME))
    }

    async fn create(&self, entity: T) -> StorageResult<T> {
        // No uniqueness check: a duplicate id appends a second record.
        let mut records = self.records.lock().await;
        records.push(entity.clone());
        Ok(Envelope::ok(entity))
    }

    async fn update(&self, id: i64, entity: T) -> StorageResult<T> {
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StorageError::NotFound(T::NAME))?;
        // Replace in place so the record keeps its position.
        records[index] = entity.clone();
        Ok(Envelope::ok(entity))
    }

    async fn delete(&self, id: i64) -> StorageResult<T> {
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StorageError::NotFound(T::NAME))?;
        Ok(Envelope::ok(records.remove(index)))
    }
}

/// Users the in-memory backend starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
        },
        User {
            id: 2,
            name: "Jane Doe".to_string(),
        },
    ]
}

/// Orders the in-memory backend starts with, each embedding its user.
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user: User {
                id: 1,
                name: "John Doe".to_string(),
            },
        },
        Order {
            id: 2,
            user: User {
                id: 2,
                name: "Jane Doe".to_string(),
            },
        },
    ]
}
