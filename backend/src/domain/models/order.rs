use crate::storage::traits::Identified;

use super::user::User;

/// Domain model representing an order record.
///
/// The order owns a denormalized copy of the user who placed it. The
/// in-memory backend stores that copy verbatim; the relational backend
/// keeps only the foreign key and joins the user back in on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user: User,
}

impl Identified for Order {
    const NAME: &'static str = "Order";

    fn id(&self) -> i64 {
        self.id
    }
}
