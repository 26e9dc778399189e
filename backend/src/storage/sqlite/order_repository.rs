use async_trait::async_trait;
use shared::Envelope;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Order, User};
use crate::storage::traits::{Identified, Repository, StorageError, StorageResult};

use super::connection::DbConnection;

/// SQLite-backed order repository.
///
/// Writes store only the foreign key. Reads join `users` so every order
/// comes back with its fully-populated user, regardless of what the write
/// path supplied.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    db: DbConnection,
}

impl SqliteOrderRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn order_from_row(row: &SqliteRow) -> Order {
        Order {
            id: row.get("id"),
            user: User {
                id: row.get("user_id"),
                name: row.get("user_name"),
            },
        }
    }
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    async fn get_all(&self) -> StorageResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT o.id AS id, u.id AS user_id, u.name AS user_name
            FROM orders o JOIN users u ON u.id = o.user_id
            ORDER BY o.id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(Envelope::ok(rows.iter().map(Self::order_from_row).collect()))
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Order> {
        let row = sqlx::query(
            r#"
            SELECT o.id AS id, u.id AS user_id, u.name AS user_name
            FROM orders o JOIN users u ON u.id = o.user_id
            WHERE o.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(row) => Ok(Envelope::ok(Self::order_from_row(&row))),
            None => Err(StorageError::NotFound(Order::NAME)),
        }
    }

    async fn create(&self, entity: Order) -> StorageResult<Order> {
        // A missing user violates the foreign key and propagates as a
        // backend error. The echoed entity still carries whatever user the
        // caller supplied; only reads enrich the name.
        sqlx::query("INSERT INTO orders (id, user_id) VALUES (?, ?)")
            .bind(entity.id)
            .bind(entity.user.id)
            .execute(self.db.pool())
            .await?;

        Ok(Envelope::ok(entity))
    }

    async fn update(&self, id: i64, entity: Order) -> StorageResult<Order> {
        let result = sqlx::query("UPDATE orders SET user_id = ? WHERE id = ?")
            .bind(entity.user.id)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(Order::NAME));
        }

        Ok(Envelope::ok(entity))
    }

    async fn delete(&self, id: i64) -> StorageResult<Order> {
        // Look the joined record up first so the deleted value can be
        // returned with its user attached.
        let row = sqlx::query(
            r#"
            SELECT o.id AS id, u.id AS user_id, u.name AS user_name
            FROM orders o JOIN users u ON u.id = o.user_id
            WHERE o.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        let Some(row) = row else {
            return Err(StorageError::NotFound(Order::NAME));
        };

        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(Envelope::ok(Self::order_from_row(&row)))
    }
}
