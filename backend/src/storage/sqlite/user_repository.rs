use async_trait::async_trait;
use shared::Envelope;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::User;
use crate::storage::traits::{Identified, Repository, StorageError, StorageResult};

use super::connection::DbConnection;

/// SQLite-backed user repository.
///
/// Every statement is parameterized; nothing is interpolated into SQL.
#[derive(Clone)]
pub struct SqliteUserRepository {
    db: DbConnection,
}

impl SqliteUserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn user_from_row(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            name: row.get("name"),
        }
    }
}

#[async_trait]
impl Repository<User> for SqliteUserRepository {
    async fn get_all(&self) -> StorageResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;

        Ok(Envelope::ok(rows.iter().map(Self::user_from_row).collect()))
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<User> {
        let row = sqlx::query("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(row) => Ok(Envelope::ok(Self::user_from_row(&row))),
            None => Err(StorageError::NotFound(User::NAME)),
        }
    }

    async fn create(&self, entity: User) -> StorageResult<User> {
        // A duplicate id is a primary-key violation and propagates as a
        // backend error, untranslated.
        sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
            .bind(entity.id)
            .bind(&entity.name)
            .execute(self.db.pool())
            .await?;

        Ok(Envelope::ok(entity))
    }

    async fn update(&self, id: i64, entity: User) -> StorageResult<User> {
        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(&entity.name)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(User::NAME));
        }

        Ok(Envelope::ok(entity))
    }

    async fn delete(&self, id: i64) -> StorageResult<User> {
        let row = sqlx::query("DELETE FROM users WHERE id = ? RETURNING id, name")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(row) => Ok(Envelope::ok(Self::user_from_row(&row))),
            None => Err(StorageError::NotFound(User::NAME)),
        }
    }
}
