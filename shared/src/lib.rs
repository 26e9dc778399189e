use serde::{Deserialize, Serialize};

/// Uniform wrapper around every successful operation result.
///
/// Every data-access and business operation answers with this shape; a
/// populated `data` field always travels with `success: true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub success: bool,
}

impl<T> Envelope<T> {
    /// Wrap `data` in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            data,
            success: true,
        }
    }
}

/// Uniform rejection shape: no `data`, a human-readable `message` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Wire shape of a user. Identical to the backend's domain model, so the
/// same type serves as create request, update request, and response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Order write DTO. Carries only the foreign key, never the nested user;
/// the read path is responsible for materializing the full user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub id: i64,
    pub user_id: i64,
}

/// Updates are a full replace keyed by the path id, so they reuse the
/// create shape.
pub type UpdateOrderRequest = CreateOrderRequest;

/// Order read DTO: always carries the fully-populated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user: User,
}
