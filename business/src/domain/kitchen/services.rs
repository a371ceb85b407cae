use async_trait::async_trait;
use uuid::Uuid;

use super::errors::NotificationError;
use super::events::OrderEvent;

/// Hands an event off for later delivery. Must not block the caller.
pub trait OrderEventPublisher: Send + Sync {
    fn publish(&self, event: OrderEvent) -> Result<(), NotificationError>;
}

#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn notify_order_ready(&self, email: &str, order_id: Uuid) -> Result<(), NotificationError>;
}
