pub mod models;
pub mod service;

pub use service::{EntityMapper, EntityService, OrderMapper, UserMapper};
