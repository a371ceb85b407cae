use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// Emitted after an order status change has been committed.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    ReadyForPickup {
        order_id: Uuid,
        user_id: UserId,
        email: Option<String>,
    },
}
