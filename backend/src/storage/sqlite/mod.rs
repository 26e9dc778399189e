//! # SQLite Storage
//!
//! Relational backend over a pooled SQLite database. Orders reference
//! users by foreign key and reads join the user back in, where the
//! in-memory backend stores a denormalized copy instead. Both satisfy the
//! same [`Repository`](crate::storage::traits::Repository) contract.

pub mod connection;
pub mod order_repository;
pub mod user_repository;

pub use connection::DbConnection;
pub use order_repository::SqliteOrderRepository;
pub use user_repository::SqliteUserRepository;
